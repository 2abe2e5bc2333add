//! Static site, department and recipient directories.
//!
//! Identifiers are stable across languages; only display names are localized.

use serde::Serialize;

use crate::models::Language;

/// Recipient used when the department is blank or has no mapping.
pub const DEFAULT_RECIPIENT: &str = "salshaiban@alkhorayef.com";

/// A localized directory entry (site or department).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn entry(id: &'static str, name: &'static str) -> Entry {
    Entry { id, name }
}

const SITES_EN: &[Entry] = &[
    entry("riyadh", "Riyadh HQ"),
    entry("jeddah", "Jeddah"),
    entry("dammam", "Dammam"),
    entry("khasm", "Khasm Alan"),
    entry("taif", "Taif"),
    entry("qassim", "Qassim"),
    entry("hofuf", "Hofuf"),
    entry("medina", "Medina"),
];

const SITES_AR: &[Entry] = &[
    entry("riyadh", "الرياض - المركز الرئيسي"),
    entry("jeddah", "جدة"),
    entry("dammam", "الدمام"),
    entry("khasm", "خشم العان"),
    entry("taif", "الطائف"),
    entry("qassim", "القصيم"),
    entry("hofuf", "الهفوف"),
    entry("medina", "المدينة المنورة"),
];

const DEPARTMENTS_EN: &[Entry] = &[
    entry("hr", "Human Resources"),
    entry("finance", "Finance"),
    entry("it", "Information Technology"),
    entry("compliance", "Contracts & Compliance"),
    entry("project", "Project Management"),
    entry("other", "Other"),
];

const DEPARTMENTS_AR: &[Entry] = &[
    entry("hr", "الموارد البشرية"),
    entry("finance", "المالية"),
    entry("it", "تقنية المعلومات"),
    entry("compliance", "العقود والامتثال"),
    entry("project", "إدارة المشاريع"),
    entry("other", "أخرى"),
];

const DEPARTMENT_EMAILS: &[(&str, &str)] = &[
    ("hr", "salshaiban@alkhorayef.com"),
    ("finance", "salshaiban@alkhorayef.com"),
    ("it", "salshaiban@alkhorayef.com"),
    ("compliance", "salshaiban@alkhorayef.com"),
    ("other", "salshaiban@alkhorayef.com"),
    ("project", "salshaiban@alkhorayef.com"),
];

pub fn sites(language: Language) -> &'static [Entry] {
    match language {
        Language::En => SITES_EN,
        Language::Ar => SITES_AR,
    }
}

pub fn departments(language: Language) -> &'static [Entry] {
    match language {
        Language::En => DEPARTMENTS_EN,
        Language::Ar => DEPARTMENTS_AR,
    }
}

fn lookup(entries: &'static [Entry], id: &str) -> Option<&'static str> {
    entries.iter().find(|e| e.id == id).map(|e| e.name)
}

/// Localized site name, or the raw identifier when unknown.
pub fn site_name(language: Language, id: &str) -> String {
    lookup(sites(language), id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

/// Localized department name, or the raw identifier when unknown.
pub fn department_name(language: Language, id: &str) -> String {
    lookup(departments(language), id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

/// Mapped recipient for a department, if any.
pub fn department_email(department: &str) -> Option<&'static str> {
    DEPARTMENT_EMAILS
        .iter()
        .find(|(id, _)| *id == department)
        .map(|(_, email)| *email)
}

/// Recipient for a department, falling back to `default` when blank or unmapped.
pub fn recipient_for(department: &str, default: &str) -> String {
    department_email(department)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}
