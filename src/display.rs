//! Presentation helpers that are pure functions of their input: colours,
//! file names, viewport width, user agents, route paths and auth error codes.

use serde::{Deserialize, Serialize};

use crate::status::AppModule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses `#rrggbb` (or `#rgb`). Unparseable input gives black.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let hex = hex.trim().trim_start_matches('#');
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    let digits: String = expanded.chars().take_while(char::is_ascii_hexdigit).take(6).collect();
    let value = u32::from_str_radix(&digits, 16).unwrap_or_default();

    Rgb {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
    }
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Black or white, whichever reads better on `hex_color`.
pub fn contrast_color(hex_color: &str) -> &'static str {
    let Rgb { r, g, b } = hex_to_rgb(hex_color);
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);

    if luminance > 128.0 { "#000000" } else { "#FFFFFF" }
}

/// Text after the last dot. Dotfiles and names without a dot have none.
pub fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[dot + 1..],
        _ => "",
    }
}

pub fn file_icon(filename: &str) -> &'static str {
    match file_extension(filename).to_ascii_lowercase().as_str() {
        "pdf" => "file-pdf",
        "doc" | "docx" | "txt" => "file-text",
        "xls" | "xlsx" | "csv" => "file-spreadsheet",
        "jpg" | "jpeg" | "png" | "gif" => "image",
        _ => "file",
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < UNITS.len() - 1 && bytes >= 1024_u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }

    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rendered = format!("{scaled:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[exponent])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: u32) -> Self {
        match width {
            0..=768 => ViewportClass::Mobile,
            769..=1024 => ViewportClass::Tablet,
            _ => ViewportClass::Desktop,
        }
    }

    /// The sidebar starts collapsed on anything narrower than a desktop.
    pub fn collapses_sidebar(self) -> bool {
        !matches!(self, ViewportClass::Desktop)
    }
}

/// Browser family from a user agent, checked in the order the agents are
/// most often ambiguous: Chrome, Firefox, Safari, Opera, Edge.
pub fn browser_name(user_agent: &str) -> &'static str {
    let agent = user_agent.to_ascii_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|needle| agent.contains(needle));

    if contains_any(&["chrome", "chromium", "crios"]) {
        "Chrome"
    } else if contains_any(&["firefox", "fxios"]) {
        "Firefox"
    } else if contains_any(&["safari"]) {
        "Safari"
    } else if contains_any(&["opr/"]) {
        "Opera"
    } else if contains_any(&["edg"]) {
        "Edge"
    } else {
        "Unknown"
    }
}

/// The root path is only active on an exact match; every other path is
/// active for itself and anything beneath it.
pub fn is_route_active(current_path: &str, path: &str) -> bool {
    if path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(path)
}

/// Module owning the current route, or `None` on the dashboard.
pub fn active_module(current_path: &str) -> Option<AppModule> {
    AppModule::ALL
        .into_iter()
        .find(|module| is_route_active(current_path, &format!("/{}", module.slug())))
}

/// User-facing text for an auth error code, falling back to the backend's
/// own message.
pub fn auth_error_message<'a>(code: &str, message: &'a str) -> &'a str {
    match code {
        "auth/invalid-email" => "The email address is invalid",
        "auth/user-disabled" => "This user account has been disabled",
        "auth/user-not-found" => "No user found with this email address",
        "auth/wrong-password" => "Incorrect password",
        "auth/email-already-in-use" => "This email is already in use",
        "auth/weak-password" => "The password is too weak",
        "auth/invalid-credential" => "Invalid login credentials",
        "auth/account-exists-with-different-credential" => {
            "An account already exists with the same email address"
        }
        "auth/operation-not-allowed" => "This operation is not allowed",
        "auth/too-many-requests" => {
            "Too many unsuccessful login attempts, please try again later"
        }
        "auth/network-request-failed" => "A network error occurred, please check your connection",
        _ if !message.is_empty() => message,
        _ => "An error occurred",
    }
}
