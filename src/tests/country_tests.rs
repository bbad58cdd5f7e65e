use crate::country::CountryDirectory;

use super::reference_records;

#[test]
fn find_by_isocode() {
    let directory = CountryDirectory::from_records(reference_records());
    assert_eq!(directory.find_by_isocode("de").unwrap().country_code, "49");
    assert_eq!(directory.find_by_isocode("DE").unwrap().country_code, "49");
    assert!(directory.find_by_isocode("xx").is_none());
    assert!(directory.find_by_isocode("bla").is_none());
}

// The only test touching the process-wide directory; everything else builds
// its own instance.
#[test]
fn load_populates_the_process_wide_directory_once() {
    let loaded = CountryDirectory::load(reference_records());
    assert_eq!(loaded.find_by_isocode("hr").unwrap().country_code, "385");

    // A second load is a no-op that hands back the same directory.
    let reloaded = CountryDirectory::load(Vec::new());
    assert!(std::sync::Arc::ptr_eq(&loaded, &reloaded));
    assert_eq!(reloaded.len(), reference_records().len());

    let global = CountryDirectory::global().expect("loaded above");
    assert!(std::sync::Arc::ptr_eq(&loaded, &global));
}
