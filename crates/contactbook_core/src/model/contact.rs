//! Contact domain model.
//!
//! # Responsibility
//! - Define the personal contact record stored by the contact repository.
//! - Own the contact validity predicate and its text rendering.
//!
//! # Invariants
//! - `id` is set once at construction and has no setter.
//! - A valid contact has a non-blank mobile number and first name, a
//!   non-empty last name, and no birth date after today.

use crate::model::entity::{Entity, EntityId, Searchable};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DESCRIBE_SEPARATOR: &str = "************************";
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Category a contact is filed under.
///
/// Discriminants keep the flag values used by exported address books.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactGroup {
    #[default]
    General = 1,
    Family = 8,
    Work = 32,
}

impl ContactGroup {
    /// Display name used in rendered contact cards.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Family => "Family",
            Self::Work => "Work",
        }
    }
}

impl Display for ContactGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failures for [`Contact`], reported in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    BlankMobileNumber,
    BlankFirstName,
    EmptyLastName,
    BirthDateInFuture {
        birth_date: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankMobileNumber => write!(f, "mobile number must not be blank"),
            Self::BlankFirstName => write!(f, "first name must not be blank"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::BirthDateInFuture { birth_date, today } => {
                write!(f, "birth date ({birth_date}) must not be after today ({today})")
            }
        }
    }
}

impl Error for ContactValidationError {}

/// Personal contact record.
///
/// Descriptive fields stay optional so partially known contacts can be
/// constructed and seeded; [`Entity::validate`] decides what may be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: EntityId,
    pub mobile_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Calendar date only; serialized as ISO-8601 `YYYY-MM-DD`.
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub group: ContactGroup,
}

impl Contact {
    /// Creates an empty contact with the given identity.
    ///
    /// # Invariants
    /// - Descriptive fields start as `None`.
    /// - `group` starts as [`ContactGroup::General`].
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            mobile_number: None,
            first_name: None,
            last_name: None,
            email: None,
            birth_date: None,
            group: ContactGroup::General,
        }
    }

    /// Creates a contact with its required lookup fields.
    ///
    /// Remaining fields are filled with the `with_*` methods.
    pub fn with_details(
        id: EntityId,
        mobile_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            mobile_number: Some(mobile_number.into()),
            first_name: Some(first_name.into()),
            ..Self::new(id)
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_group(mut self, group: ContactGroup) -> Self {
        self.group = group;
        self
    }

    /// First and last name joined by one space; absent parts render empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    /// Validates against an explicit `today` instead of the local clock.
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ContactValidationError> {
        if is_blank(self.mobile_number.as_deref()) {
            return Err(ContactValidationError::BlankMobileNumber);
        }
        if is_blank(self.first_name.as_deref()) {
            return Err(ContactValidationError::BlankFirstName);
        }
        if self.last_name.as_deref().map_or(true, str::is_empty) {
            return Err(ContactValidationError::EmptyLastName);
        }
        if let Some(birth_date) = self.birth_date {
            if birth_date > today {
                return Err(ContactValidationError::BirthDateInFuture { birth_date, today });
            }
        }
        Ok(())
    }

    /// Renders the multi-line contact card shown to end users.
    pub fn describe(&self) -> String {
        let birth_date = self
            .birth_date
            .map(|date| date.format(SHORT_DATE_FORMAT).to_string())
            .unwrap_or_default();

        let mut text = String::from("Contact Info\n");
        text.push_str(&format!("Contact ID : {}\n", self.id));
        text.push_str(&format!("Name  : {}\n", self.full_name()));
        text.push_str(&format!(
            "Mobile  : {} \n",
            self.mobile_number.as_deref().unwrap_or_default()
        ));
        text.push_str(&format!(
            "Email  : {} \n",
            self.email.as_deref().unwrap_or_default()
        ));
        text.push_str(&format!("Date of Birth : {birth_date}\n"));
        text.push_str(&format!("Group : {} \n", self.group));
        text.push_str(DESCRIBE_SEPARATOR);
        text.push('\n');
        text
    }
}

impl Entity for Contact {
    type ValidationError = ContactValidationError;

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<(), ContactValidationError> {
        self.validate_on(Local::now().date_naive())
    }
}

impl Searchable for Contact {
    /// Case-sensitive match over id, names, mobile, email and birth date.
    ///
    /// Names match by prefix; every other field matches by substring.
    fn matches(&self, query: &str) -> bool {
        let contains =
            |value: &Option<String>| value.as_deref().is_some_and(|v| v.contains(query));
        let starts_with =
            |value: &Option<String>| value.as_deref().is_some_and(|v| v.starts_with(query));

        self.id.to_string().contains(query)
            || starts_with(&self.first_name)
            || starts_with(&self.last_name)
            || contains(&self.mobile_number)
            || contains(&self.email)
            || self
                .birth_date
                .is_some_and(|date| date.to_string().contains(query))
    }

    fn search_order(&self, other: &Self) -> Ordering {
        self.first_name.cmp(&other.first_name)
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
