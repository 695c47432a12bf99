//! Page and action identifiers

/// Navigable application areas.
pub mod pages {
    pub const DASHBOARD: &str = "dashboard";

    // Staff profiles
    pub const PROFILES: &str = "profiles";
    pub const PROFILE_CREATE: &str = "profile-create";
    pub const PROFILE_EDIT: &str = "profile-edit";

    // Guardians
    pub const GUARDIANS: &str = "guardians";
    pub const GUARDIAN_CREATE: &str = "guardian-create";
    pub const GUARDIAN_EDIT: &str = "guardian-edit";

    // Students
    pub const STUDENTS: &str = "students";
    pub const STUDENT_CREATE: &str = "student-create";
    pub const STUDENT_EDIT: &str = "student-edit";

    // Circle sessions
    pub const SESSIONS: &str = "sessions";
    pub const SESSION_CREATE: &str = "session-create";
    pub const SESSION_EDIT: &str = "session-edit";

    // Memorization tracking
    pub const DAILY_FOLLOWUPS: &str = "daily-followups";
    pub const MONTHLY_EXAMS: &str = "monthly-exams";

    pub const REPORTS: &str = "reports";
    pub const SETTINGS: &str = "settings";

    /// Every page identifier any role can be granted, in menu order.
    pub const ALL: &[&str] = &[
        DASHBOARD,
        PROFILES,
        PROFILE_CREATE,
        PROFILE_EDIT,
        GUARDIANS,
        GUARDIAN_CREATE,
        GUARDIAN_EDIT,
        STUDENTS,
        STUDENT_CREATE,
        STUDENT_EDIT,
        SESSIONS,
        SESSION_CREATE,
        SESSION_EDIT,
        DAILY_FOLLOWUPS,
        MONTHLY_EXAMS,
        REPORTS,
        SETTINGS,
    ];
}

/// Mutating operations, named `{record}-{verb}`.
pub mod actions {
    pub const PROFILE_CREATE: &str = "profile-create";
    pub const PROFILE_EDIT: &str = "profile-edit";
    pub const PROFILE_DELETE: &str = "profile-delete";

    pub const GUARDIAN_CREATE: &str = "guardian-create";
    pub const GUARDIAN_EDIT: &str = "guardian-edit";
    pub const GUARDIAN_DELETE: &str = "guardian-delete";

    pub const STUDENT_VIEW: &str = "student-view";
    pub const STUDENT_CREATE: &str = "student-create";
    pub const STUDENT_EDIT: &str = "student-edit";
    pub const STUDENT_DELETE: &str = "student-delete";

    pub const SESSION_CREATE: &str = "session-create";
    pub const SESSION_EDIT: &str = "session-edit";
    pub const SESSION_DELETE: &str = "session-delete";

    pub const FOLLOWUP_CREATE: &str = "followup-create";
    pub const FOLLOWUP_EDIT: &str = "followup-edit";
    pub const FOLLOWUP_DELETE: &str = "followup-delete";

    pub const EXAM_CREATE: &str = "exam-create";
    pub const EXAM_EDIT: &str = "exam-edit";
    pub const EXAM_DELETE: &str = "exam-delete";

    pub const REPORT_VIEW: &str = "report-view";
    pub const REPORT_EXPORT: &str = "report-export";
    pub const SETTINGS_EDIT: &str = "settings-edit";

    /// Every action identifier any role can be granted.
    pub const ALL: &[&str] = &[
        PROFILE_CREATE,
        PROFILE_EDIT,
        PROFILE_DELETE,
        GUARDIAN_CREATE,
        GUARDIAN_EDIT,
        GUARDIAN_DELETE,
        STUDENT_VIEW,
        STUDENT_CREATE,
        STUDENT_EDIT,
        STUDENT_DELETE,
        SESSION_CREATE,
        SESSION_EDIT,
        SESSION_DELETE,
        FOLLOWUP_CREATE,
        FOLLOWUP_EDIT,
        FOLLOWUP_DELETE,
        EXAM_CREATE,
        EXAM_EDIT,
        EXAM_DELETE,
        REPORT_VIEW,
        REPORT_EXPORT,
        SETTINGS_EDIT,
    ];
}
