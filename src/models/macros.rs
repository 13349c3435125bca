/// Declares a typed record over an [`ApiObject`](crate::ApiObject).
///
/// Each field line names an accessor, its converter and its wire key.
/// For every field the macro generates:
///
/// - a `const` [`Field`](crate::models::Field) named after the field in upper case
/// - a read accessor `name()` returning [`ApiProperty`](crate::models::ApiProperty)
/// - a write accessor `name_mut()` returning [`ApiPropertyMut`](crate::models::ApiPropertyMut)
///
/// The record also gets [`ApiRecord`](crate::models::ApiRecord) with every
/// declared key in `FIELD_KEYS`, `From<ApiObject>`, and transparent serde
/// over its data bag. A declared field can therefore never lack its key or
/// either accessor.
///
/// # Example
///
/// ```rust
/// use ontraport_api::api_object;
/// use ontraport_api::converters::{IntConverter, StringConverter};
/// use ontraport_api::models::{ApiPropertyBase, ApiRecord};
///
/// api_object! {
///     /// A tag attached to contacts.
///     pub struct ApiTag {
///         /// The tag's identifier.
///         id: IntConverter => "tag_id",
///         /// The tag's display name.
///         name: StringConverter => "tag_name",
///     }
/// }
///
/// let mut tag = ApiTag::default();
/// tag.name_mut().set_value("VIP".to_string()).unwrap();
///
/// assert_eq!(tag.name().raw_value(), "VIP");
/// assert!(!tag.id().has_key());
/// assert_eq!(ApiTag::ID.key(), "tag_id");
/// assert_eq!(ApiTag::FIELD_KEYS, &["tag_id", "tag_name"]);
/// ```
#[macro_export]
macro_rules! api_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $converter:ty => $key:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        $vis struct $name {
            data: $crate::ApiObject,
        }

        $crate::paste::paste! {
            impl $name {
                $(
                    #[doc = concat!("The `", $key, "` field.")]
                    pub const [<$field:upper>]: $crate::models::Field<$converter> =
                        $crate::models::Field::new($key);
                )+

                /// Creates an empty record.
                #[must_use]
                pub fn new() -> Self {
                    Self::default()
                }

                $(
                    $(#[$field_meta])*
                    #[must_use]
                    pub fn $field(&self) -> $crate::models::ApiProperty<'_, $converter> {
                        Self::[<$field:upper>].bind(&self.data)
                    }

                    #[doc = concat!("Writable accessor for the `", $key, "` field.")]
                    pub fn [<$field _mut>](&mut self) -> $crate::models::ApiPropertyMut<'_, $converter> {
                        Self::[<$field:upper>].bind_mut(&mut self.data)
                    }
                )+
            }
        }

        impl $crate::models::ApiRecord for $name {
            const FIELD_KEYS: &'static [&'static str] = &[$($key),+];

            fn from_data(data: $crate::ApiObject) -> Self {
                Self { data }
            }

            fn data(&self) -> &$crate::ApiObject {
                &self.data
            }

            fn data_mut(&mut self) -> &mut $crate::ApiObject {
                &mut self.data
            }

            fn into_data(self) -> $crate::ApiObject {
                self.data
            }
        }

        impl From<$crate::ApiObject> for $name {
            fn from(data: $crate::ApiObject) -> Self {
                Self { data }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                $crate::serde::Serialize::serialize(&self.data, serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                <$crate::ApiObject as $crate::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::from)
            }
        }
    };
}
