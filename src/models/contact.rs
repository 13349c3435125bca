//! Contact resource.

use crate::api::{DeletableResource, OntraportResource, WritableResource};
use crate::converters::{
    DateTimeConverter, DecimalConverter, EnumConverter, IntConverter, ListConverter,
    LongConverter, StringConverter, TagDelimiter,
};

crate::api_enum! {
    /// Email subscription status of a contact.
    pub enum BulkMailStatus {
        /// Only transactional email may be sent.
        #[default]
        TransactionalOnly = "0",
        /// Opted in to marketing email.
        SingleOptIn = "1",
        /// Confirmed opt-in through a double opt-in email.
        DoubleOptIn = "2",
        /// Delivery failed permanently.
        HardBounce = "-2",
        /// Held for compliance review.
        UnderReview = "-5",
    }
}

crate::api_enum! {
    /// SMS subscription status of a contact.
    pub enum BulkSmsStatus {
        /// Not subscribed.
        #[default]
        Unconfirmed = "0",
        /// Opted in to SMS.
        OptedIn = "1",
        /// Confirmed opt-in.
        DoubleOptIn = "2",
        /// Delivery failed permanently.
        HardBounce = "-2",
    }
}

crate::api_object! {
    /// A contact record.
    ///
    /// Account-specific custom fields (`f1234`) are not declared here; read
    /// them through [`ApiProperty`](crate::models::ApiProperty) bound to the
    /// record's data bag.
    pub struct ApiContact {
        /// The contact's identifier.
        id: LongConverter => "id",
        /// The user who owns the contact.
        owner: IntConverter => "owner",
        /// First name.
        first_name: StringConverter => "firstname",
        /// Last name.
        last_name: StringConverter => "lastname",
        /// Email address.
        email: StringConverter => "email",
        /// Street address.
        address: StringConverter => "address",
        /// Second address line.
        address2: StringConverter => "address2",
        /// City.
        city: StringConverter => "city",
        /// State or province code.
        state: StringConverter => "state",
        /// Postal code.
        zip: StringConverter => "zip",
        /// Country code.
        country: StringConverter => "country",
        /// Birthday.
        birthday: DateTimeConverter => "birthday",
        /// When the contact was created.
        date: DateTimeConverter => "date",
        /// When the contact was last modified.
        dlm: DateTimeConverter => "dlm",
        /// When the contact last had activity.
        dla: DateTimeConverter => "dla",
        /// Company name.
        company: StringConverter => "company",
        /// Website URL.
        website: StringConverter => "website",
        /// Office phone number.
        office_phone: StringConverter => "office_phone",
        /// Mobile number used for SMS.
        sms_number: StringConverter => "sms_number",
        /// Email subscription status.
        bulk_mail: EnumConverter<BulkMailStatus> => "bulk_mail",
        /// SMS subscription status.
        bulk_sms: EnumConverter<BulkSmsStatus> => "bulk_sms",
        /// Total amount spent.
        spent: DecimalConverter => "spent",
        /// Number of purchases.
        num_purchased: IntConverter => "num_purchased",
        /// Lead score.
        grade: DecimalConverter => "grade",
        /// Identifiers of the tags applied to the contact.
        tags: ListConverter<LongConverter, TagDelimiter> => "contact_cat",
        /// When the contact last opened or clicked.
        last_activity: DateTimeConverter => "last_activity",
        /// Stable unique identifier across accounts.
        unique_id: StringConverter => "unique_id",
    }
}

impl OntraportResource for ApiContact {
    const SINGULAR: &'static str = "Contact";
    const PLURAL: &'static str = "Contacts";
}

impl DeletableResource for ApiContact {}

impl WritableResource for ApiContact {}
