/// Symbolic formats. Each preset maps to one literal, constant template
/// string understood by [`crate::PhoneNumber::format`].
///
/// The enum derives [`strum::EnumString`], so `"europe".parse()` resolves
/// a preset from its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NamedFormat {
    /// `+385 (0) 91 512 5486`
    Europe,
    /// `(545) 545-5454`
    Us,
    /// `+385915125486`, the canonical form.
    Default,
}

impl NamedFormat {
    /// The literal template behind the preset.
    pub fn template(self) -> &'static str {
        match self {
            NamedFormat::Europe => "+%c (0) %a %f %l",
            NamedFormat::Us => "(%a) %f-%l",
            NamedFormat::Default => "+%c%a%n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NamedFormat;

    #[test]
    fn presets_parse_from_lowercase_names() {
        assert_eq!("europe".parse::<NamedFormat>(), Ok(NamedFormat::Europe));
        assert_eq!("us".parse::<NamedFormat>(), Ok(NamedFormat::Us));
        assert_eq!("default".parse::<NamedFormat>(), Ok(NamedFormat::Default));
        assert!("balkan".parse::<NamedFormat>().is_err());
    }
}
