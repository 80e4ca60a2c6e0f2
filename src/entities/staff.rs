//! Staff entity - Employees, contractors and volunteers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::store::Record;

/// Department a staff member works in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Senior leadership
    Leadership,
    /// Office and administration
    Administration,
    /// Music and worship
    Worship,
    /// Youth programs
    Youth,
    /// Children's programs
    Children,
    /// Community outreach
    Outreach,
    /// Buildings and maintenance
    Facilities,
}

impl Department {
    /// Every department, in the order used by lists and charts
    pub const ALL: [Self; 7] = [
        Self::Leadership,
        Self::Administration,
        Self::Worship,
        Self::Youth,
        Self::Children,
        Self::Outreach,
        Self::Facilities,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Leadership => "Leadership",
            Self::Administration => "Administration",
            Self::Worship => "Worship",
            Self::Youth => "Youth",
            Self::Children => "Children",
            Self::Outreach => "Outreach",
            Self::Facilities => "Facilities",
        }
    }
}

/// How a staff member is employed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Salaried full-time
    #[serde(rename = "Full-time")]
    FullTime,
    /// Salaried part-time
    #[serde(rename = "Part-time")]
    PartTime,
    /// Unpaid
    Volunteer,
    /// Fixed-term contractor
    Contract,
}

impl EmploymentType {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Volunteer => "Volunteer",
            Self::Contract => "Contract",
        }
    }
}

/// A stored staff record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Unique within the staff collection
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Job title
    pub position: String,
    /// Department
    pub department: Department,
    /// Employment arrangement
    pub employment_type: EmploymentType,
    /// Annual salary, zero for volunteers
    pub salary: f64,
    /// First day of work
    pub hire_date: NaiveDate,
    /// Portrait URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Date of birth, if known
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Emergency contact name and phone
    #[serde(default)]
    pub emergency_contact: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Form input for a staff member that has not been assigned an id yet
#[derive(Clone, Debug, PartialEq)]
pub struct NewStaff {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Job title
    pub position: String,
    /// Department
    pub department: Department,
    /// Employment arrangement
    pub employment_type: EmploymentType,
    /// Annual salary
    pub salary: f64,
    /// First day of work
    pub hire_date: NaiveDate,
    /// Portrait URL
    pub avatar: Option<String>,
    /// Date of birth, if known
    pub birth_date: Option<NaiveDate>,
    /// Postal address
    pub address: Option<String>,
    /// Emergency contact name
    pub emergency_name: Option<String>,
    /// Emergency contact phone
    pub emergency_phone: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Staff {
    /// Builds the stored record from form input and an assigned id.
    ///
    /// Emergency name and phone are joined into one contact line.
    #[must_use]
    pub fn from_new(id: i64, new: NewStaff) -> Self {
        let emergency_contact = match (new.emergency_name, new.emergency_phone) {
            (Some(name), Some(phone)) => Some(format!("{name} {phone}")),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        };

        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            position: new.position,
            department: new.department,
            employment_type: new.employment_type,
            salary: new.salary,
            hire_date: new.hire_date,
            avatar: new.avatar,
            birth_date: new.birth_date,
            address: new.address,
            emergency_contact,
            notes: new.notes,
        }
    }

    /// `"First Last"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Staff {
    fn id(&self) -> i64 {
        self.id
    }
}
