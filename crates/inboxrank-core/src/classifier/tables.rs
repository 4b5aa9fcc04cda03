//! Built-in keyword and domain tables.
//!
//! All entries are lowercase and matched as plain substrings.

/// Keywords that raise priority (+3, or +5 for [`CRITICAL_KEYWORDS`]).
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "interview",
    "deadline",
    "payment",
    "invoice",
    "overdue",
    "action required",
    "important",
    "critical",
    "security alert",
    "password reset",
    "verify your account",
    "offer letter",
    "final notice",
];

/// Subset of [`HIGH_PRIORITY_KEYWORDS`] weighted +5.
pub const CRITICAL_KEYWORDS: &[&str] = &["urgent", "emergency", "interview"];

/// Newsletter and bulk-mail terms (−3 each).
pub const LOW_PRIORITY_KEYWORDS: &[&str] = &[
    "newsletter",
    "unsubscribe",
    "promotion",
    "promotional",
    "no-reply",
    "noreply",
    "digest",
    "weekly update",
    "marketing",
    "advertisement",
    "sponsored",
    "webinar",
];

/// Social-network notification phrases (−4 each).
pub const SOCIAL_PATTERNS: &[&str] = &[
    "linkedin",
    "facebook",
    "twitter",
    "instagram",
    "connection request",
    "invitation to connect",
    "wants to connect",
    "endorsed you",
    "viewed your profile",
    "new follower",
    "tagged you",
    "friend request",
    "liked your",
    "commented on your",
];

/// Marketing phrases (−3 each).
pub const PROMOTIONAL_PATTERNS: &[&str] = &[
    "% off",
    "sale",
    "discount",
    "coupon",
    "promo code",
    "limited time",
    "special offer",
    "exclusive deal",
    "free shipping",
    "shop now",
    "buy now",
    "black friday",
    "clearance",
    "deal of the day",
];

/// Time-pressure phrases (+4 each).
pub const TIME_URGENCY_KEYWORDS: &[&str] = &[
    "today",
    "tonight",
    "asap",
    "as soon as possible",
    "end of day",
    "deadline",
    "due tomorrow",
    "within 24 hours",
    "expires",
    "last chance",
    "immediately",
    "right away",
    "time sensitive",
];

/// Professional-context terms (+2 each, capped at +6).
pub const BUSINESS_KEYWORDS: &[&str] = &[
    "meeting",
    "project",
    "proposal",
    "contract",
    "client",
    "report",
    "budget",
    "review",
    "schedule",
    "conference",
    "agenda",
    "quarterly",
    "presentation",
];

/// Personal-life terms (+1 each, capped at +3).
pub const PERSONAL_KEYWORDS: &[&str] = &[
    "family",
    "birthday",
    "dinner",
    "party",
    "wedding",
    "vacation",
    "weekend",
    "holiday",
    "anniversary",
    "reunion",
];

/// Sender substrings that raise priority (+3 each).
pub const IMPORTANT_SENDERS: &[&str] = &[
    "hr",
    "ceo",
    "boss",
    "manager",
    "director",
    "recruit",
    "talent",
    "payroll",
];

/// Sender domain substrings and their weights, first match wins.
pub const DOMAIN_IMPORTANCE: &[(&str, i32)] = &[
    ("bank", 4),
    ("gov", 4),
    ("paypal.com", 3),
    ("edu", 2),
    ("github.com", 1),
    ("linkedin.com", -2),
    ("facebookmail.com", -2),
    ("twitter.com", -2),
    ("instagram.com", -2),
    ("mailchimp", -3),
    ("marketing", -2),
    ("newsletter", -2),
    ("noreply", -1),
    ("no-reply", -1),
];
