//! Settings entity - The single preferences bundle.
//!
//! Stored as one JSON object and overwritten wholesale on save. Every field
//! has a default, so a bundle written by an older version with fewer keys
//! still loads.

use serde::{Deserialize, Serialize};

/// How often automatic backups run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
}

/// Organization-wide preferences
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    // Organization profile
    /// Organization name
    pub organization_name: String,
    /// Postal address
    pub organization_address: String,
    /// Name of the organization's leader
    pub leader_name: String,
    /// Public contact email
    pub organization_email: String,
    /// Public contact phone
    pub organization_phone: String,
    /// Website
    pub organization_website: String,

    // Staff
    /// Day of month salaries are paid
    pub default_salary_day: u8,
    /// Office hours text
    pub working_hours: String,
    /// Notify staff of schedule changes
    pub staff_notifications: bool,
    /// Record attendance automatically
    pub auto_attendance: bool,
    /// Annual vacation allowance in days
    pub vacation_days: u32,

    // System
    /// Send email notifications
    pub email_notifications: bool,
    /// Run automatic backups
    pub auto_backup: bool,
    /// Use the dark theme
    pub dark_mode: bool,
    /// Backup schedule
    pub backup_frequency: BackupFrequency,
    /// Interface language
    pub language: String,
    /// IANA timezone name
    pub timezone: String,

    // Finance
    /// ISO currency code
    pub currency: String,
    /// Month the fiscal year starts
    pub fiscal_year_start: String,
    /// Tax rate as a fraction, e.g. `0.1`
    pub tax_rate: f64,

    // Members
    /// Email new members automatically
    pub auto_welcome_email: bool,
    /// Remind members to renew
    pub member_renewal_reminder: bool,
    /// Days before following up with a visitor
    pub visitor_followup_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            organization_name: "Community Organization".to_string(),
            organization_address: "123 Main Street, Springfield, ST 12345".to_string(),
            leader_name: "John Smith".to_string(),
            organization_email: "info@example.org".to_string(),
            organization_phone: "(555) 123-4567".to_string(),
            organization_website: "www.example.org".to_string(),
            default_salary_day: 15,
            working_hours: "9:00 AM - 5:00 PM".to_string(),
            staff_notifications: true,
            auto_attendance: true,
            vacation_days: 20,
            email_notifications: true,
            auto_backup: true,
            dark_mode: false,
            backup_frequency: BackupFrequency::Weekly,
            language: "english".to_string(),
            timezone: "America/New_York".to_string(),
            currency: "USD".to_string(),
            fiscal_year_start: "January".to_string(),
            tax_rate: 0.1,
            auto_welcome_email: true,
            member_renewal_reminder: true,
            visitor_followup_days: 7,
        }
    }
}
