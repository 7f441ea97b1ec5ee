/// Declares a closed, integer-backed vendor enum.
///
/// The generated type (de)serializes as its integer discriminant and rejects
/// any value outside the listed variants.
macro_rules! vendor_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[serde(try_from = "i64", into = "i64")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every variant, in discriminant order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Kebab-case name, as accepted on the command line.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::types::UnknownVariant;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    _ => Err($crate::types::UnknownVariant {
                        type_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value as i64
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::UnknownVariant;

            /// Accepts either the label or the integer discriminant.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $( if s == $label { return Ok($name::$variant); } )+
                match s.parse::<i64>() {
                    Ok(value) => $name::try_from(value),
                    Err(_) => Err($crate::types::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// A value for an enum field that this client does not know.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {type_name} value {value}")]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
}

mod meta;
pub use self::meta::{ListEnvelope, ListMeta, PagedCollection, ResultSuccess};

mod contact;
pub use self::contact::{Address, Contact};

mod venue;
pub use self::venue::{CloseOutStatus, RatePlan, Room, RoomOption, Venue, VenueID};

mod booking;
pub use self::booking::{Accommodation, Booking, BookingID, BookingStatus, RoomReservation};

mod invoice;
pub use self::invoice::{Invoice, InvoiceItem, InvoicePayment, InvoiceRefType, InvoiceStatus};

mod email_log;
pub use self::email_log::EmailLog;
