//! Static profile content rendered by the page sections.
//!
//! Everything here is inert data. Icons are referenced by a short glyph so the
//! markup stays free of an icon-font dependency.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER: &str = "Rehman";

/// Pixels hidden under the fixed navbar when scrolling to an anchor.
pub const NAV_SCROLL_OFFSET: f64 = 70.0;

pub const PROFILE_IMAGE: &str = "/assets/profile.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section_id: "home" },
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Skills", section_id: "skills" },
    NavItem { label: "Projects", section_id: "projects" },
    NavItem { label: "Contact", section_id: "contact" },
];

// =============================================================================
// HERO
// =============================================================================

pub const HERO_GREETING: &str = "Hi, my name is";

pub const HERO_PHRASES: [&str; 4] = [
    "I build things for the web.",
    "I create modern web applications.",
    "I develop MERN stack solutions.",
    "I design user experiences.",
];

pub const HERO_SUMMARY: &str = "I'm a MERN Stack Developer specializing in building exceptional digital \
     experiences. Currently, I'm focused on building accessible, human-centered products.";

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Hello! I'm Rehman, a passionate MERN Stack Developer who loves building things that live on the \
     internet. My interest in web development started back when I decided to try customizing various web \
     templates. Turns out hacking together a custom reblog button taught me a lot about HTML & CSS!",
    "Fast-forward to today, and I've had the privilege of working on diverse projects. My main focus these \
     days is building accessible, inclusive products and digital experiences for various clients.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        glyph: "</>",
        title: "Frontend Development",
        description: "Building responsive and interactive user interfaces with modern frameworks and tools.",
    },
    Experience {
        glyph: "▤",
        title: "Backend Development",
        description: "Creating robust server-side applications and RESTful APIs.",
    },
    Experience {
        glyph: "◍",
        title: "Database Management",
        description: "Designing and optimizing database schemas for scalable applications.",
    },
    Experience {
        glyph: "▣",
        title: "UI/UX Design",
        description: "Crafting intuitive and visually appealing user experiences.",
    },
];

pub const TECHNOLOGIES: [&str; 8] = [
    "JavaScript (ES6+)",
    "React.js",
    "Node.js",
    "MongoDB",
    "Express.js",
    "TypeScript",
    "Next.js",
    "TailwindCSS",
];

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
    pub years: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 2] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            Skill { name: "React.js", level: 90, years: "3 Years" },
            Skill { name: "Next.js", level: 85, years: "2 Years" },
            Skill { name: "JavaScript", level: 90, years: "4 Years" },
            Skill { name: "TypeScript", level: 80, years: "2 Years" },
            Skill { name: "Redux", level: 85, years: "3 Years" },
            Skill { name: "TailwindCSS", level: 90, years: "2 Years" },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            Skill { name: "Node.js", level: 85, years: "3 Years" },
            Skill { name: "Express.js", level: 85, years: "3 Years" },
            Skill { name: "MongoDB", level: 85, years: "3 Years" },
            Skill { name: "REST APIs", level: 90, years: "3 Years" },
        ],
    },
];

/// Names drifting across the skills backdrop.
pub const FLOATING_SKILLS: [&str; 10] = [
    "React.js",
    "Next.js",
    "JavaScript",
    "TypeScript",
    "Redux",
    "TailwindCSS",
    "Node.js",
    "Express.js",
    "MongoDB",
    "REST APIs",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TOOLS: [Tool; 2] = [
    Tool { name: "VS Code", description: "Primary IDE" },
    Tool { name: "Git", description: "Version Control" },
];

/// Vertical lane (px) for a floating skill badge inside a backdrop of
/// `container_height`. Spreads badges over tenths of the height and wraps
/// before the bottom 100 px.
#[must_use]
pub fn floating_lane(index: usize, container_height: f64) -> f64 {
    let usable = (container_height - 100.0).max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let raw = index as f64 * (container_height / 10.0);
    raw % usable
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub repository: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Blogify",
        description: "A full-featured blog website built with Node.js and EJS templates. Users can create, \
                      edit, and manage their blog posts with a clean and intuitive interface.",
        image: "/assets/blogify.png",
        technologies: &["Node.js", "MongoDB", "Express", "EJS"],
        features: &[
            "User authentication & authorization",
            "Create, edit, and delete blog posts",
            "Rich text editor for content",
            "Comment system",
            "Responsive design for all devices",
        ],
        repository: "https://github.com/RehmanAly14/BLOG-WEBSITE.git",
    },
    Project {
        title: "URL Shortener",
        description: "A secure URL shortening service with user authentication and analytics. Create \
                      shortened URLs and track their usage with detailed statistics.",
        image: "/assets/url-shortener.png",
        technologies: &["Node.js", "MongoDB", "Express", "EJS", "JWT"],
        features: &[
            "JWT-based authentication",
            "Custom URL slugs",
            "Click tracking & analytics",
            "QR code generation",
            "User dashboard",
        ],
        repository: "https://github.com/RehmanAly14/Short-UrL/tree/1c01c94680cd4dfa4b86a44ff9244a534201982c",
    },
];

// =============================================================================
// CONTACT + FOOTER
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", url: "https://github.com/RehmanAly14", glyph: "GH" },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/sherry-rehman-2a42aa355",
        glyph: "in",
    },
    SocialLink { label: "Instagram", url: "https://www.instagram.com/rehmanaly_14", glyph: "IG" },
    SocialLink { label: "Email", url: "mailto:rehmanaly250@gmail.com", glyph: "@" },
];

impl SocialLink {
    /// `mailto:` links open the mail client in place; the rest open a new tab.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} All rights reserved.")
}
