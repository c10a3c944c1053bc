//! Macro for giving unit enums a stable string form
//!
//! Several domain enums travel through config files, environment variables
//! and log fields as lowercase identifiers. This macro generates the
//! `as_str`/`ALL` helpers plus matching `Display` and `FromStr` impls from a
//! single variant table so the two directions can never drift apart.
//!
//! # Example
//!
//! ```rust
//! use timelog_domain::impl_domain_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Early,
//!     Late,
//! }
//!
//! impl_domain_str_conversions!(Shift {
//!     Early => "early",
//!     Late => "late",
//! });
//!
//! assert_eq!(Shift::Late.as_str(), "late");
//! assert_eq!("EARLY".parse::<Shift>(), Ok(Shift::Early));
//! ```

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a unit enum
///
/// Parsing trims surrounding whitespace and ignores ASCII case; the error
/// message names the enum and lists the accepted values.
#[macro_export]
macro_rules! impl_domain_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase identifier for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!(
                        "Invalid {} '{}', expected one of: {}",
                        stringify!($enum_name),
                        s,
                        [$($str),+].join(", ")
                    )),
                }
            }
        }
    };
}
