use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire strings are the demo page's lowercase identifiers
/// (`data-user-type` attributes and fixture status fields).
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    Admin => "admin",
    Doctor => "doctor",
    Patient => "patient",
});

impl Role {
    /// All roles, in selector order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Patient];
}

str_enum!(AppointmentStatus {
    Confirmada => "confirmada",
    Pendiente => "pendiente",
});

str_enum!(DoctorStatus {
    Activo => "activo",
    Inactivo => "inactivo",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trip() {
        for (variant, s) in [
            (Role::Admin, "admin"),
            (Role::Doctor, "doctor"),
            (Role::Patient, "patient"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Role::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Confirmada, "confirmada"),
            (AppointmentStatus::Pendiente, "pendiente"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Doctor).unwrap();
        assert_eq!(json, "\"doctor\"");
        let back: Role = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(back, Role::Patient);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Role::from_str("superadmin").is_err());
        assert!(AppointmentStatus::from_str("cancelada").is_err());
        assert!(DoctorStatus::from_str("").is_err());
    }

    #[test]
    fn all_roles_covers_selector() {
        assert_eq!(Role::ALL.len(), 3);
    }
}
