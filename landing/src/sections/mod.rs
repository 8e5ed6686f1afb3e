// Landing page sections
// Developed with ❤️ for Sri Lankan farmers (c)2026 Agri Tamizha

mod about;
mod background;
mod community;
mod features;
mod floating;
mod footer;
mod hero;
mod nav;
mod progress_bar;
mod reveal;

pub use about::About;
pub use background::FloatingLeaves;
pub use community::Community;
pub use features::Features;
pub use floating::{FloatingWhatsApp, ScrollTopButton};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use progress_bar::ProgressBar;
pub use reveal::RevealOnView;
