//! Static page content: links, copy and feature cards.

use crate::config::QrConfig;
use crate::share::ShareTarget;

/// WhatsApp group invitation.
pub const INVITE_LINK: &str = "https://chat.whatsapp.com/HvBFi18JsTE3EeW18kmQjy";

pub const SHARE_TARGET: ShareTarget = ShareTarget {
    title: "Agri தமிழா",
    text: "தமிழ் விவசாயிகளுக்கான ஒரு மாபெரும் குடும்பம். இப்போதே இணையுங்கள்!",
    url: INVITE_LINK,
};

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Image request URL for a QR code encoding `data`.
pub fn qr_code_url(data: &str, qr: &QrConfig) -> String {
    format!(
        "{QR_ENDPOINT}?size={size}x{size}&data={data}&margin={margin}",
        size = qr.size,
        data = urlencoding::encode(data),
        margin = qr.margin,
    )
}

pub mod assets {
    pub const LOGO: &str = "assets/logo.png";
    pub const BANNER: &str = "assets/banner.jpg";
    pub const ICON: &str = "assets/icon.jpg";
    pub const ABOUT_PHOTO: &str = "https://images.unsplash.com/photo-1574943320219-553eb213f72d?q=80&w=1200&auto=format&fit=crop";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// Spans both grid columns, image beside the text.
    Wide { image_first: bool },
    /// Single column, image above the text.
    Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Gold,
    Sky,
    Lime,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Green => "accent-green",
            Accent::Gold => "accent-gold",
            Accent::Sky => "accent-sky",
            Accent::Lime => "accent-lime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub layout: CardLayout,
    pub accent: Accent,
    pub stats: &'static [Stat],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🌐",
        title: "தகவல் ஒருங்கிணைப்பு",
        description: "சரியான தகவல்களை மக்களிடம் கொண்டு செல்லுதல். விவசாயிகளுக்கு தேவையான அனைத்து தகவல்களும் ஒரே இடத்தில்.",
        image: "https://images.unsplash.com/photo-1530836369250-ef72a3f5cda8?q=80&w=800&auto=format&fit=crop",
        image_alt: "Information Sharing",
        layout: CardLayout::Wide { image_first: true },
        accent: Accent::Green,
        stats: &[],
    },
    Feature {
        icon: "📈",
        title: "Updates",
        description: "புதிய திட்டங்கள் மற்றும் updates பகிர்வு. தினசரி விவசாய குறிப்புகள் மற்றும் வழிகாட்டுதல்கள்.",
        image: "https://images.unsplash.com/photo-1492496913980-501348b61469?q=80&w=800&auto=format&fit=crop",
        image_alt: "Video Updates",
        layout: CardLayout::Tile,
        accent: Accent::Gold,
        stats: &[],
    },
    Feature {
        icon: "🏗️",
        title: "Network Building",
        description: "Creators இணைந்து வேலை செய்ய ஒரு தளம். வலுவான தொழில்முறை நெட்வொர்க் உருவாக்கம்.",
        image: "https://images.unsplash.com/photo-1521737711867-e3b97375f902?q=80&w=800&auto=format&fit=crop",
        image_alt: "Network Building",
        layout: CardLayout::Tile,
        accent: Accent::Sky,
        stats: &[],
    },
    Feature {
        icon: "👨‍🌾",
        title: "Farmer Support",
        description: "பயனுள்ள தகவல்களை வழங்குதல். விவசாயிகளுக்கு தேவையான ஆதரவு மற்றும் வழிகாட்டுதல் 24/7.",
        image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?q=80&w=800&auto=format&fit=crop",
        image_alt: "Farmer Support",
        layout: CardLayout::Wide { image_first: false },
        accent: Accent::Lime,
        stats: &[
            Stat {
                value: "100%",
                label: "Free Support",
                accent: Accent::Green,
            },
            Stat {
                value: "24/7",
                label: "Available",
                accent: Accent::Gold,
            },
        ],
    },
];

pub const AUDIENCE: &[&str] = &[
    "Video Creators",
    "Agri Startups",
    "Agri Companies",
    "Service Providers",
    "Trainers / Teachers",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const OBJECTIVES: &[Objective] = &[
    Objective {
        icon: "🎯",
        text: "Information Sharing",
    },
    Objective {
        icon: "🛡️",
        text: "Guidance & Support",
    },
    Objective {
        icon: "🤝",
        text: "Network Building",
    },
    Objective {
        icon: "🎬",
        text: "Agri updates",
    },
    Objective {
        icon: "👨‍🌾",
        text: "Farmer Support",
    },
];

/// `01. Information Sharing` style label, numbered from one.
pub fn objective_label(index: usize, objective: &Objective) -> String {
    format!("{:02}. {}", index + 1, objective.text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// SVG path data for a 24x24 viewBox.
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        url: "https://www.facebook.com/profile.php?id=61583665466868",
        icon: "M18 2h-3a5 5 0 00-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 011-1h3z",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/agritamizha",
        icon: "M16 11.37A4 4 0 1112.63 8 4 4 0 0116 11.37z M17.5 6.5h.01 M7.5 21h9A4.5 4.5 0 0021 16.5v-9A4.5 4.5 0 0016.5 3h-9A4.5 4.5 0 003 7.5v9A4.5 4.5 0 007.5 21z",
    },
    SocialLink {
        name: "YouTube",
        url: "https://youtube.com/channel/UCVs8Fdg9VuCqC7fCSFwiNRQ?si=k0NZ19AjY8khwVaM",
        icon: "M19.615 3.184c-3.604-.246-11.631-.245-15.23 0-3.897.266-4.356 2.62-4.385 8.816.029 6.185.484 8.549 4.385 8.816 3.6.245 11.626.246 15.23 0 3.897-.266 4.356-2.62 4.385-8.816-.029-6.185-.484-8.549-4.385-8.816zm-10.615 12.816v-8l8 3.993-8 4.007z",
    },
    SocialLink {
        name: "Tiktok",
        url: "https://www.tiktok.com/@agritamizha",
        icon: "M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-1-.05A6.33 6.33 0 0 0 5 20.1a6.34 6.34 0 0 0 10.86-4.43v-7a8.16 8.16 0 0 0 4.77 1.52v-3.4a4.85 4.85 0 0 1-1-.1z",
    },
];

pub const CONTACT_PHONE: &str = "94702597012";
pub const CONTACT_EMAIL: &str = "agritamizha@gmail.com";

/// Click-to-chat deep link for a phone number in international format.
pub fn whatsapp_chat_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

pub const WHATSAPP_ICON: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

/// Glyphs drifting in the page background.
pub const FLOATING_LEAVES: [&str; 6] = ["🍃", "🌾", "🌿", "💧", "🍂", "🌱"];
