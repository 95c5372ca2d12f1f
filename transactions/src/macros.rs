/// Declares a validated transaction variant over its `…Fields` struct.
///
/// The generated newtype can only be built through `new` (or `TryFrom`), which runs the
/// variant's validator, and decoding runs the same validator. It serializes as the
/// fields plus the `TransactionType` discriminator.
macro_rules! transaction_variant {
    (
        $(#[$meta:meta])*
        $name:ident($fields:ident) => $validate:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name($fields);

        impl $name {
            pub const TRANSACTION_TYPE: $crate::TransactionType = $crate::TransactionType::$name;

            pub fn new(fields: $fields) -> Result<Self, $crate::error::TransactionError> {
                $validate(&fields)?;
                Ok(Self(fields))
            }

            pub fn fields(&self) -> &$fields {
                &self.0
            }

            pub fn into_fields(self) -> $fields {
                self.0
            }

            /// Signature, signing key and hash do not take part in validation.
            pub(crate) fn common_mut(&mut self) -> &mut $crate::common::TransactionCommon {
                &mut self.0.common
            }
        }

        impl std::ops::Deref for $name {
            type Target = $fields;

            fn deref(&self) -> &$fields {
                &self.0
            }
        }

        impl TryFrom<$fields> for $name {
            type Error = $crate::error::TransactionError;

            fn try_from(fields: $fields) -> Result<Self, Self::Error> {
                Self::new(fields)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                #[derive(serde::Serialize)]
                struct Tagged<'a> {
                    #[serde(rename = "TransactionType")]
                    transaction_type: &'static str,
                    #[serde(flatten)]
                    fields: &'a $fields,
                }

                Tagged {
                    transaction_type: Self::TRANSACTION_TYPE.as_str(),
                    fields: &self.0,
                }
                .serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(serde::Deserialize)]
                struct Tagged {
                    #[serde(rename = "TransactionType")]
                    transaction_type: String,
                    #[serde(flatten)]
                    fields: $fields,
                }

                let tagged = Tagged::deserialize(deserializer)?;
                if tagged.transaction_type != Self::TRANSACTION_TYPE.as_str() {
                    return Err(serde::de::Error::custom(format!(
                        "expected TransactionType {}, found {}",
                        Self::TRANSACTION_TYPE,
                        tagged.transaction_type
                    )));
                }
                Self::new(tagged.fields).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for $crate::Transaction {
            fn from(tx: $name) -> Self {
                $crate::Transaction::$name(tx)
            }
        }

        impl TryFrom<$crate::Transaction> for $name {
            type Error = $crate::error::TransactionError;

            fn try_from(tx: $crate::Transaction) -> Result<Self, Self::Error> {
                match tx {
                    $crate::Transaction::$name(inner) => Ok(inner),
                    other => Err($crate::error::TransactionError::WrongVariant {
                        expected: $crate::TransactionType::$name,
                        actual: other.transaction_type(),
                    }),
                }
            }
        }
    };
}
