//! Static navigation entry tables per role.

use crate::access::{
    ADMIN_DASHBOARD_PATH, DOCTOR_DASHBOARD_PATH, HOME_PATH, PATIENT_DASHBOARD_PATH,
};
use crate::model::role::Role;
use serde::Serialize;

/// Stable discriminant for one navigation entry.
///
/// The presentation layer keys icon assets and "is this the active route"
/// highlighting off this id; the prefix match itself lives in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItemId {
    Home,
    About,
    Contact,
    AdminDashboard,
    AdminUsers,
    AdminDoctors,
    AdminAppointments,
    DoctorDashboard,
    DoctorSchedule,
    DoctorAppointments,
    DoctorPatients,
    PatientDashboard,
    PatientAppointments,
    PatientDoctors,
    PatientMedicalHistory,
    PatientNotifications,
}

impl NavItemId {
    /// Stable string id crossing the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Contact => "contact",
            Self::AdminDashboard => "admin_dashboard",
            Self::AdminUsers => "admin_users",
            Self::AdminDoctors => "admin_doctors",
            Self::AdminAppointments => "admin_appointments",
            Self::DoctorDashboard => "doctor_dashboard",
            Self::DoctorSchedule => "doctor_schedule",
            Self::DoctorAppointments => "doctor_appointments",
            Self::DoctorPatients => "doctor_patients",
            Self::PatientDashboard => "patient_dashboard",
            Self::PatientAppointments => "patient_appointments",
            Self::PatientDoctors => "patient_doctors",
            Self::PatientMedicalHistory => "patient_medical_history",
            Self::PatientNotifications => "patient_notifications",
        }
    }
}

/// Closed icon identifier set for menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    Home,
    Info,
    Mail,
    Gauge,
    Users,
    Stethoscope,
    CalendarRange,
    CalendarCheck,
    ClipboardList,
    FileClock,
    Bell,
}

impl IconTag {
    /// Stable string id crossing the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Info => "info",
            Self::Mail => "mail",
            Self::Gauge => "gauge",
            Self::Users => "users",
            Self::Stethoscope => "stethoscope",
            Self::CalendarRange => "calendar_range",
            Self::CalendarCheck => "calendar_check",
            Self::ClipboardList => "clipboard_list",
            Self::FileClock => "file_clock",
            Self::Bell => "bell",
        }
    }
}

/// One navigation menu entry.
///
/// `label_key` is a translation key resolved by the shell's localization
/// provider; the core never holds display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub id: NavItemId,
    pub path: &'static str,
    pub label_key: &'static str,
    pub icon: IconTag,
}

const PUBLIC_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: NavItemId::Home,
        path: HOME_PATH,
        label_key: "nav.home",
        icon: IconTag::Home,
    },
    NavEntry {
        id: NavItemId::About,
        path: "/about",
        label_key: "nav.about",
        icon: IconTag::Info,
    },
    NavEntry {
        id: NavItemId::Contact,
        path: "/contact",
        label_key: "nav.contact",
        icon: IconTag::Mail,
    },
];

const ADMIN_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: NavItemId::AdminDashboard,
        path: ADMIN_DASHBOARD_PATH,
        label_key: "nav.admin.dashboard",
        icon: IconTag::Gauge,
    },
    NavEntry {
        id: NavItemId::AdminUsers,
        path: "/admin/users",
        label_key: "nav.admin.users",
        icon: IconTag::Users,
    },
    NavEntry {
        id: NavItemId::AdminDoctors,
        path: "/admin/doctors",
        label_key: "nav.admin.doctors",
        icon: IconTag::Stethoscope,
    },
    NavEntry {
        id: NavItemId::AdminAppointments,
        path: "/admin/appointments",
        label_key: "nav.admin.appointments",
        icon: IconTag::CalendarRange,
    },
];

const DOCTOR_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: NavItemId::DoctorDashboard,
        path: DOCTOR_DASHBOARD_PATH,
        label_key: "nav.doctor.dashboard",
        icon: IconTag::Gauge,
    },
    NavEntry {
        id: NavItemId::DoctorSchedule,
        path: "/doctor/schedule",
        label_key: "nav.doctor.schedule",
        icon: IconTag::CalendarRange,
    },
    NavEntry {
        id: NavItemId::DoctorAppointments,
        path: "/doctor/appointments",
        label_key: "nav.doctor.appointments",
        icon: IconTag::CalendarCheck,
    },
    NavEntry {
        id: NavItemId::DoctorPatients,
        path: "/doctor/patients",
        label_key: "nav.doctor.patients",
        icon: IconTag::Users,
    },
];

const PATIENT_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: NavItemId::PatientDashboard,
        path: PATIENT_DASHBOARD_PATH,
        label_key: "nav.patient.dashboard",
        icon: IconTag::Gauge,
    },
    NavEntry {
        id: NavItemId::PatientAppointments,
        path: "/patient/appointments",
        label_key: "nav.patient.appointments",
        icon: IconTag::CalendarCheck,
    },
    NavEntry {
        id: NavItemId::PatientDoctors,
        path: "/patient/doctors",
        label_key: "nav.patient.doctors",
        icon: IconTag::Stethoscope,
    },
    NavEntry {
        id: NavItemId::PatientMedicalHistory,
        path: "/patient/medical-history",
        label_key: "nav.patient.medical_history",
        icon: IconTag::FileClock,
    },
    NavEntry {
        id: NavItemId::PatientNotifications,
        path: "/patient/notifications",
        label_key: "nav.patient.notifications",
        icon: IconTag::Bell,
    },
];

/// Ordered navigation entries for one role.
///
/// Returns the same static slice on every call, so order stability holds
/// by construction. `None` (anonymous visitor) yields the public set.
pub fn entries_for(role: Option<Role>) -> &'static [NavEntry] {
    match role {
        None => PUBLIC_ENTRIES,
        Some(Role::Admin) => ADMIN_ENTRIES,
        Some(Role::Doctor) => DOCTOR_ENTRIES,
        Some(Role::User) => PATIENT_ENTRIES,
    }
}

#[cfg(test)]
mod tests {
    use super::{entries_for, NavItemId};
    use crate::access::default_landing_for;
    use crate::model::role::Role;

    #[test]
    fn every_role_has_a_non_empty_ordered_set() {
        for role in Role::all() {
            assert!(!entries_for(Some(role)).is_empty());
        }
        assert_eq!(entries_for(None).len(), 3);
    }

    #[test]
    fn output_is_deterministic_and_order_stable() {
        for role in [None, Some(Role::User), Some(Role::Doctor), Some(Role::Admin)] {
            let first = entries_for(role);
            let second = entries_for(role);
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second));
        }
    }

    #[test]
    fn first_entry_for_each_role_is_its_landing_route() {
        for role in Role::all() {
            let entries = entries_for(Some(role));
            assert_eq!(entries[0].path, default_landing_for(role));
        }
    }

    #[test]
    fn anonymous_set_contains_only_public_entries() {
        let ids: Vec<NavItemId> = entries_for(None).iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![NavItemId::Home, NavItemId::About, NavItemId::Contact]);
    }

    #[test]
    fn entry_ids_and_paths_are_unique_within_a_set() {
        for role in [None, Some(Role::User), Some(Role::Doctor), Some(Role::Admin)] {
            let entries = entries_for(role);
            let mut paths: Vec<&str> = entries.iter().map(|entry| entry.path).collect();
            paths.sort_unstable();
            paths.dedup();
            assert_eq!(paths.len(), entries.len());
        }
    }

    #[test]
    fn discriminants_expose_stable_wire_strings() {
        assert_eq!(NavItemId::PatientMedicalHistory.as_str(), "patient_medical_history");
        assert_eq!(NavItemId::AdminDashboard.as_str(), "admin_dashboard");
    }
}
