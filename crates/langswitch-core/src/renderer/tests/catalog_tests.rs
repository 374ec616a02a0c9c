use tempfile::tempdir;

use crate::renderer::catalog::{discover, RendererCatalog};
use crate::tests::integration::common::{descriptor_header, write_file};

#[test]
fn test_catalog_orders_by_name_case_insensitively() {
    let temp_dir = tempdir().unwrap();
    let widgets = temp_dir.path();

    write_file(&widgets.join("a/tpw_a.widget"), &descriptor_header("Banana", None));
    write_file(&widgets.join("b/tpw_b.widget"), &descriptor_header("apple", None));
    write_file(&widgets.join("other/other.widget"), &descriptor_header("Ignored", None));

    let catalog = discover(widgets);

    assert_eq!(catalog.ids(), vec!["b/tpw_b.widget", "a/tpw_a.widget"]);
    let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["apple", "Banana"]);
}

#[test]
fn test_catalog_skips_nameless_and_deep_files() {
    let temp_dir = tempdir().unwrap();
    let widgets = temp_dir.path();

    write_file(&widgets.join("tpw_top.widget"), &descriptor_header("Top Level", None));
    write_file(&widgets.join("blank/tpw_blank.widget"), "/* Description: no name here */");
    write_file(&widgets.join("a/b/tpw_deep.widget"), &descriptor_header("Too Deep", None));
    write_file(&widgets.join(".hidden/tpw_hidden.widget"), &descriptor_header("Hidden", None));

    let catalog = RendererCatalog::discover(widgets);

    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("tpw_top.widget"));
    assert!(!catalog.contains("blank/tpw_blank.widget"));
}

#[test]
fn test_catalog_natural_number_order() {
    let temp_dir = tempdir().unwrap();
    let widgets = temp_dir.path();

    write_file(&widgets.join("s10/tpw_s10.widget"), &descriptor_header("Style 10", None));
    write_file(&widgets.join("s2/tpw_s2.widget"), &descriptor_header("Style 2", None));

    let catalog = discover(widgets);
    assert_eq!(catalog.ids(), vec!["s2/tpw_s2.widget", "s10/tpw_s10.widget"]);
}

#[test]
fn test_missing_directory_yields_empty_catalog() {
    let temp_dir = tempdir().unwrap();
    let catalog = discover(temp_dir.path().join("does-not-exist"));
    assert!(catalog.is_empty());
    assert_eq!(catalog.into_iter().count(), 0);
}
