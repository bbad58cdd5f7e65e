mod country_tests;

use std::sync::Once;

use crate::country::CountryRecord;
use crate::PhoneUtil;

static INIT_LOGGER: Once = Once::new();

/// Fresh engine with test logging initialized once per process.
fn phone_util() -> PhoneUtil {
    INIT_LOGGER.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneUtil::new()
}

/// Reference dialing-code records shared across the suite.
fn reference_records() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("United States", "us", "1"),
        CountryRecord::new("United Kingdom", "gb", "44"),
        CountryRecord::new("Germany", "de", "49"),
        CountryRecord::new("Croatia", "hr", "385"),
        CountryRecord::new("Slovenia", "si", "386"),
    ]
}
