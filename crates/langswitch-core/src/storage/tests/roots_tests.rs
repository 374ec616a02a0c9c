use std::path::PathBuf;

use crate::renderer::id::RendererId;
use crate::storage::roots::{AssetRoot, StorageRoots};

fn roots() -> StorageRoots {
    StorageRoots::new(
        AssetRoot::new("/srv/plugin", "https://cdn.test/plugin/"),
        AssetRoot::new("/srv/uploads/langswitch", "https://site.test/uploads/langswitch"),
    )
}

#[test]
fn test_locate_by_storage_tag() {
    let roots = roots();
    assert_eq!(
        roots.locate(&RendererId::parse("flags/tpw_flags.widget")),
        Some(PathBuf::from("/srv/plugin/widgets/flags/tpw_flags.widget"))
    );
    assert_eq!(
        roots.locate(&RendererId::parse("*flags/tpw_flags.widget")),
        Some(PathBuf::from("/srv/uploads/langswitch/widgets/flags/tpw_flags.widget"))
    );
}

#[test]
fn test_locate_rejects_escaping_ids() {
    let roots = roots();
    for raw in [
        "",
        "../secret.widget",
        "flags/../../x.widget",
        "/etc/passwd",
        "./flags/tpw_flags.widget",
    ] {
        assert!(roots.locate(&RendererId::parse(raw)).is_none(), "{:?} should be rejected", raw);
    }
}

#[test]
fn test_url_for_joins_cleanly() {
    let roots = roots();
    assert_eq!(
        roots.bundled.url_for("/widgets/flags/tpw_flags.css"),
        "https://cdn.test/plugin/widgets/flags/tpw_flags.css"
    );
    assert_eq!(
        roots.for_id(&RendererId::parse("*x")).url_for("widgets/x.js"),
        "https://site.test/uploads/langswitch/widgets/x.js"
    );
}
