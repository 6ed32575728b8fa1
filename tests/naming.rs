//! Module names captured at the call site.

use logtemplate::module_name;

mod pkg {
    pub mod sub {
        pub fn name(prefix: &str) -> String {
            logtemplate::module_name!(prefix)
        }
    }
}

#[test]
fn test_nested_unit_name_is_dotted() {
    assert_eq!(pkg::sub::name(""), "naming.pkg.sub");
    assert_eq!(pkg::sub::name("svc"), "svc.naming.pkg.sub");
}

#[test]
fn test_crate_root_name() {
    assert_eq!(module_name!(), "naming");
}
