pub mod fs;
pub mod html;
pub mod natural;

pub use fs::{find_files_shallow, read_head};
pub use html::{encode_script_url, escape_html};
pub use natural::natural_cmp_ignore_case;
