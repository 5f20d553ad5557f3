//! Built-in demo catalog backing every view. All rows are hard-coded and
//! reset on process restart; a real deployment would replace this module
//! with file-store and user-directory collaborators.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::identity::Role;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StorageUsage {
    pub used_gb: u64,
    pub total_gb: u64,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TransferStats {
    pub total_files: u64,
    pub active_users: u64,
    pub transfers_today: u64,
    pub security_alerts: u64,
}

pub const STORAGE_USAGE: StorageUsage = StorageUsage { used_gb: 750, total_gb: 1000, percent: 75 };

pub const TRANSFER_STATS: TransferStats = TransferStats {
    total_files: 1247,
    active_users: 23,
    transfers_today: 156,
    security_alerts: 0,
};

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub file: &'static str,
    pub user: &'static str,
    pub when: &'static str,
    pub status: &'static str,
}

pub static RECENT_ACTIVITY: Lazy<Vec<ActivityEntry>> = Lazy::new(|| {
    vec![
        ActivityEntry { action: "Upload", file: "quarterly-report.pdf", user: "John Doe", when: "2 minutes ago", status: "completed" },
        ActivityEntry { action: "Download", file: "project-specs.docx", user: "Jane Smith", when: "5 minutes ago", status: "completed" },
        ActivityEntry { action: "Share", file: "client-data.xlsx", user: "Mike Johnson", when: "12 minutes ago", status: "pending" },
        ActivityEntry { action: "Delete", file: "old-backup.zip", user: "Admin", when: "1 hour ago", status: "completed" },
    ]
});

/// Working directory shown by the file browser.
pub const BROWSE_PATH: &str = "/home/documents/projects";

#[derive(Debug, Clone, Serialize)]
pub struct FolderEntry {
    pub name: &'static str,
    pub files: u32,
    pub modified: &'static str,
}

pub static FOLDERS: Lazy<Vec<FolderEntry>> = Lazy::new(|| {
    vec![
        FolderEntry { name: "Client Files", files: 24, modified: "2 days ago" },
        FolderEntry { name: "Templates", files: 8, modified: "1 week ago" },
        FolderEntry { name: "Archive", files: 156, modified: "1 month ago" },
    ]
});

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: &'static str,
    pub size: &'static str,
    pub kind: &'static str,
    pub modified: &'static str,
    pub shared: bool,
}

pub static FILES: Lazy<Vec<FileEntry>> = Lazy::new(|| {
    vec![
        FileEntry { name: "project-proposal.pdf", size: "2.3 MB", kind: "pdf", modified: "1 hour ago", shared: true },
        FileEntry { name: "design-mockup.png", size: "4.1 MB", kind: "image", modified: "3 hours ago", shared: false },
        FileEntry { name: "client-data.xlsx", size: "856 KB", kind: "document", modified: "5 hours ago", shared: true },
        FileEntry { name: "backup-archive.zip", size: "125 MB", kind: "archive", modified: "1 day ago", shared: false },
        FileEntry { name: "presentation.mp4", size: "45.2 MB", kind: "video", modified: "2 days ago", shared: false },
    ]
});

#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub username: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub status: &'static str,
    pub last_login: &'static str,
    pub created_at: &'static str,
    pub permissions: &'static [&'static str],
}

pub static USER_DIRECTORY: Lazy<Vec<UserAccount>> = Lazy::new(|| {
    vec![
        UserAccount {
            username: "john.admin",
            email: "john@company.com",
            role: Role::Admin,
            status: "active",
            last_login: "2024-01-15 10:30 AM",
            created_at: "2023-06-01",
            permissions: &["read", "write", "delete", "admin"],
        },
        UserAccount {
            username: "sarah.user",
            email: "sarah@company.com",
            role: Role::User,
            status: "active",
            last_login: "2024-01-15 09:15 AM",
            created_at: "2023-08-15",
            permissions: &["read", "write"],
        },
        UserAccount {
            username: "client.acme",
            email: "contact@acme.com",
            role: Role::Client,
            status: "active",
            last_login: "2024-01-14 02:45 PM",
            created_at: "2023-12-01",
            permissions: &["read"],
        },
        UserAccount {
            username: "vendor.supply",
            email: "orders@supplycorp.com",
            role: Role::Vendor,
            status: "inactive",
            last_login: "2024-01-10 11:20 AM",
            created_at: "2023-09-20",
            permissions: &["read", "write"],
        },
    ]
});

#[derive(Debug, Clone, Serialize)]
pub struct SettingEntry {
    pub setting: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsSection {
    pub title: &'static str,
    pub entries: Vec<SettingEntry>,
}

pub static SETTINGS_SECTIONS: Lazy<Vec<SettingsSection>> = Lazy::new(|| {
    vec![
        SettingsSection {
            title: "SFTP Server",
            entries: vec![
                SettingEntry { setting: "Server Endpoint", value: "sftp.example-corp.com" },
                SettingEntry { setting: "Port", value: "22" },
                SettingEntry { setting: "Protocol", value: "SFTP" },
                SettingEntry { setting: "Encryption", value: "AES-256" },
                SettingEntry { setting: "Max Concurrent Connections", value: "100" },
                SettingEntry { setting: "Session Timeout (minutes)", value: "30" },
                SettingEntry { setting: "Root Directory", value: "/secure-transfer" },
                SettingEntry { setting: "Allowed IP Addresses (CIDR)", value: "0.0.0.0/0" },
            ],
        },
        SettingsSection {
            title: "Cloud Storage",
            entries: vec![
                SettingEntry { setting: "Transfer Server ID", value: "s-1234567890abcdef0" },
                SettingEntry { setting: "Storage Bucket", value: "example-corp-sftp-storage" },
                SettingEntry { setting: "Region", value: "us-east-1" },
                SettingEntry { setting: "Access Logs", value: "enabled" },
                SettingEntry { setting: "Log Retention (days)", value: "90" },
            ],
        },
        SettingsSection {
            title: "Notifications",
            entries: vec![
                SettingEntry { setting: "Email Notifications", value: "enabled" },
                SettingEntry { setting: "Notify on Upload", value: "enabled" },
                SettingEntry { setting: "Notify on Download", value: "disabled" },
                SettingEntry { setting: "Notify on Login", value: "enabled" },
                SettingEntry { setting: "Notify on Error", value: "enabled" },
                SettingEntry { setting: "Admin Email", value: "admin@example-corp.com" },
            ],
        },
        SettingsSection {
            title: "Security",
            entries: vec![
                SettingEntry { setting: "Enforce Strong Passwords", value: "enabled" },
                SettingEntry { setting: "Max Login Attempts", value: "5" },
                SettingEntry { setting: "Lockout Duration (minutes)", value: "30" },
                SettingEntry { setting: "Session Timeout (minutes)", value: "60" },
                SettingEntry { setting: "Two-Factor Authentication", value: "disabled" },
                SettingEntry { setting: "Audit Logs", value: "enabled" },
                SettingEntry { setting: "Password Change Interval (days)", value: "90" },
            ],
        },
    ]
});
