//! Serde utility helpers for case-insensitive deserialization

/// Implements case-insensitive deserialization for unit-only enums.
///
/// Usage:
/// ```
/// use playground_lens_core::impl_case_insensitive_deserialize;
///
/// #[derive(Debug, PartialEq)]
/// enum Mode {
///     Fast,
///     Slow,
/// }
///
/// impl_case_insensitive_deserialize!(
///     Mode,
///     Fast => "fast",
///     Slow => "slow"
/// );
///
/// let mode: Mode = serde_json::from_str(r#""FAST""#).unwrap();
/// assert_eq!(mode, Mode::Fast);
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}
