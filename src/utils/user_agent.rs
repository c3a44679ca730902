//! Browser and OS detection from User-Agent strings.
//!
//! Both detectors are data-driven ordered lists evaluated first-match-wins.
//! The tables are deliberately replaceable lookup data, not control flow;
//! extending coverage means adding a row, not a branch.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered browser table: any of the substrings matches the label.
///
/// Chrome must stay ahead of Safari (Chrome UAs contain "Safari"), and
/// Opera/Edge ahead of Chrome for the same reason.
const BROWSER_TABLE: &[(&[&str], &str)] = &[
    (&["Opera", "OPR/"], "Opera"),
    (&["Edge"], "Edge"),
    (&["Chrome"], "Chrome"),
    (&["Safari"], "Safari"),
    (&["Firefox"], "Firefox"),
    (&["MSIE", "Trident/7"], "Internet Explorer"),
];

/// Ordered OS table: case-insensitive word-bounded patterns.
///
/// Mobile devices come before the Mac entry (their UAs claim "like Mac OS X")
/// and named distributions before the generic Linux entry.
const OS_TABLE: &[(&str, &str)] = &[
    ("windows nt 10", "Windows 10"),
    ("windows nt 6\\.3", "Windows 8.1"),
    ("windows nt 6\\.2", "Windows 8"),
    ("windows nt 6\\.1|windows nt 7\\.0", "Windows 7"),
    ("windows nt 6\\.0", "Windows Vista"),
    ("windows nt 5\\.2", "Windows Server 2003/XP"),
    ("windows nt 5\\.1|windows xp", "Windows XP"),
    ("windows ce", "Windows CE"),
    ("windows 98|win98", "Windows 98"),
    ("windows 95|win95", "Windows 95"),
    ("iphone", "iPhone"),
    ("ipod", "iPod"),
    ("ipad", "iPad"),
    ("android", "Android"),
    ("blackberry", "BlackBerry"),
    ("webos", "Mobile"),
    ("macintosh|mac os x", "Mac OS X"),
    ("mac_powerpc", "Mac OS 9"),
    ("fedora", "Linux - Fedora"),
    ("kubuntu", "Linux - Kubuntu"),
    ("ubuntu", "Linux - Ubuntu"),
    ("debian", "Linux - Debian"),
    ("centos", "Linux - CentOS"),
    ("red hat", "Linux - Red Hat"),
    ("linux", "Linux"),
    ("freebsd", "FreeBSD"),
    ("openbsd", "OpenBSD"),
    ("netbsd", "NetBSD"),
    ("sunos", "SunOS"),
    ("solaris", "Solaris"),
    ("unix", "Unix"),
    ("os/2", "OS/2"),
];

static OS_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    OS_TABLE
        .iter()
        .map(|(pattern, label)| {
            let regex = Regex::new(&format!(r"(?i)\b({pattern})\b"))
                .expect("invalid OS pattern in table");
            (regex, *label)
        })
        .collect()
});

static ARCH_64_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(x86_64|x86-64|Win64|WOW64|x64|ia64|amd64|ppc64|sparc64|IRIX64)\b")
        .expect("invalid arch pattern")
});

/// Derives a browser name from a User-Agent string.
pub fn browser_name(user_agent: &str) -> String {
    for (needles, label) in BROWSER_TABLE {
        if needles.iter().any(|needle| user_agent.contains(needle)) {
            return (*label).to_string();
        }
    }

    "Other".to_string()
}

/// Derives an OS label with an architecture suffix from a User-Agent string.
///
/// Unrecognized agents map to plain `Unknown` with no suffix.
pub fn os_name(user_agent: &str) -> String {
    let arch = if ARCH_64_PATTERN.is_match(user_agent) {
        "64"
    } else {
        "32"
    };

    for (regex, label) in OS_PATTERNS.iter() {
        if regex.is_match(user_agent) {
            return format!("{label} x{arch}");
        }
    }

    "Unknown".to_string()
}
