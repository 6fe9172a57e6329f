//! Everything the page displays. All tables are compiled in and never change.

use std::collections::HashSet;

use anyhow::{Result, bail, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub tags: &'static [&'static str],
    /// CSS `background` value for the card header.
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub icon: &'static str,
}

impl Skill {
    pub fn percent(&self) -> String {
        format!("{}%", self.level)
    }

    /// Width of the progress bar; never wider than its track.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    /// Hover colour class.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub first_names: &'static str,
    pub surname: &'static str,
    pub brand: &'static str,
    pub badge: &'static str,
    pub headline: &'static str,
    pub pitch: &'static str,
    pub image: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_display: &'static str,
    pub location: &'static str,
    pub year: u16,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.surname)
    }

    /// Letter shown when the profile picture fails to load.
    pub fn monogram(&self) -> char {
        self.first_names
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// Email, phone and location cards of the contact section.
    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        vec![
            ContactChannel {
                label: "Email",
                icon: "bi-envelope",
                accent: "card-violet",
                value: self.email,
                href: Some(self.mailto()),
            },
            ContactChannel {
                label: "Phone",
                icon: "bi-telephone",
                accent: "card-cyan",
                value: self.phone_display,
                href: Some(self.tel()),
            },
            ContactChannel {
                label: "Location",
                icon: "bi-geo-alt",
                accent: "card-fuchsia",
                value: self.location,
                href: None,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub value: &'static str,
    /// `None` renders the value as plain text.
    pub href: Option<String>,
}

/// The tables of one portfolio, grouped so they can be validated together.
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub skills: &'static [Skill],
    pub socials: &'static [SocialLink],
    pub tech: &'static [&'static str],
    pub about: &'static [AboutCard],
    pub info: &'static [InfoCard],
    pub stats: &'static [Stat],
}

pub const PROFILE: Profile = Profile {
    first_names: "Arowolo Aliu",
    surname: "Adekunle",
    brand: "Arowolo",
    badge: "Available for Opportunities",
    headline: "Computer Engineering Technology Graduate | Software Developer | Web Designer",
    pitch: "Crafting innovative digital solutions with expertise in full-stack development and system design.",
    image: "/assets/arowolo.jpeg",
    email: "arowolo886@gmail.com",
    phone: "+2348145856060",
    phone_display: "+234 814 585 6060",
    location: "Agbowo, Ibadan, Oyo State",
    year: 2025,
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mama Bee's Kitchen",
        description: "Professional restaurant website with online menu, ordering system, and elegant design showcasing authentic Nigerian cuisine and catering services.",
        url: "https://mamabeeskitchen.com/",
        tags: &["Restaurant", "E-Commerce", "WordPress"],
        gradient: "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)",
    },
    Project {
        title: "Munat Tech",
        description: "Modern technology company website featuring IT solutions, software development services, and digital transformation consulting.",
        url: "https://munattech.online/",
        tags: &["Tech Company", "Web Development", "Business"],
        gradient: "linear-gradient(135deg, #3b82f6 0%, #06b6d4 100%)",
    },
    Project {
        title: "5NJ Limited",
        description: "Corporate business website for a leading Nigerian company, featuring company profile, services portfolio, and professional brand identity.",
        url: "https://www.5njlimited.com/",
        tags: &["Corporate", "Business", "Professional"],
        gradient: "linear-gradient(135deg, #8b5cf6 0%, #9333ea 100%)",
    },
    Project {
        title: "Akwire Farms",
        description: "Agricultural business platform showcasing modern farming operations, produce distribution, and sustainable agriculture practices.",
        url: "https://akwirefarms.com/",
        tags: &["Agriculture", "E-Commerce", "Business"],
        gradient: "linear-gradient(135deg, #10b981 0%, #14b8a6 100%)",
    },
    Project {
        title: "Abeke Adun",
        description: "Cultural and creative website celebrating Nigerian heritage through art, storytelling, and community engagement initiatives.",
        url: "https://abekeadun.com/",
        tags: &["Cultural", "Creative", "Community"],
        gradient: "linear-gradient(135deg, #d946ef 0%, #ec4899 100%)",
    },
    Project {
        title: "Onisowo",
        description: "Dynamic business website providing innovative solutions and services with modern design and user-friendly interface.",
        url: "https://onisowo.com/",
        tags: &["Business", "Services", "Innovation"],
        gradient: "linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%)",
    },
    Project {
        title: "Vision Spark Marketing",
        description: "Comprehensive marketing platform delivering innovative solutions for business growth and digital presence enhancement.",
        url: "http://visionsparkmarketingsolution.com/",
        tags: &["Marketing", "Digital", "Business Solutions"],
        gradient: "linear-gradient(135deg, #f43f5e 0%, #fb923c 100%)",
    },
    Project {
        title: "E-Commerce Solutions",
        description: "Custom online shopping platforms with secure payment integration, inventory management, and customer analytics.",
        url: "https://example-ecommerce.com",
        tags: &["E-Commerce", "React", "Node.js"],
        gradient: "linear-gradient(135deg, #0ea5e9 0%, #3b82f6 100%)",
    },
    Project {
        title: "Healthcare Management",
        description: "Digital health platform with appointment scheduling, patient records management, and telemedicine capabilities.",
        url: "https://example-healthcare.com",
        tags: &["Healthcare", "TypeScript", "Database"],
        gradient: "linear-gradient(135deg, #84cc16 0%, #22c55e 100%)",
    },
    Project {
        title: "Educational Portal",
        description: "Interactive learning management system with video courses, assessments, and student progress tracking.",
        url: "https://example-education.com",
        tags: &["Education", "Vue.js", "Firebase"],
        gradient: "linear-gradient(135deg, #f59e0b 0%, #fb923c 100%)",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Web Development (HTML/CSS/JS)", level: 95, icon: "bi-code-slash" },
    Skill { name: "React & Frontend Frameworks", level: 90, icon: "bi-filetype-jsx" },
    Skill { name: "PHP & Backend Development", level: 88, icon: "bi-filetype-php" },
    Skill { name: "Database Management (MySQL)", level: 87, icon: "bi-database" },
    Skill { name: "Computer Systems & Networks", level: 92, icon: "bi-hdd-network" },
    Skill { name: "UI/UX Design & Prototyping", level: 85, icon: "bi-palette2" },
    Skill { name: "System Design & Architecture", level: 88, icon: "bi-diagram-3" },
    Skill { name: "Code Debugging & Testing", level: 93, icon: "bi-bug" },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", icon: "bi-linkedin", url: "https://linkedin.com/in/arowolo-aliu", color: "hover-blue" },
    SocialLink { name: "GitHub", icon: "bi-github", url: "https://github.com/arowoloaliu", color: "hover-gray" },
    SocialLink { name: "Instagram", icon: "bi-instagram", url: "https://instagram.com/arowoloaliu", color: "hover-pink" },
    SocialLink { name: "Facebook", icon: "bi-facebook", url: "https://facebook.com/arowoloaliu", color: "hover-blue-dark" },
    SocialLink { name: "WhatsApp", icon: "bi-whatsapp", url: "https://wa.me/2348145856060", color: "hover-green" },
];

pub const TECH: &[&str] = &[
    "Git & GitHub",
    "WordPress",
    "Python",
    "C/C++",
    "Arduino",
    "Robotics",
    "Linux",
    "Photoshop",
];

pub const ABOUT: &[AboutCard] = &[
    AboutCard {
        title: "Professional Journey",
        icon: "bi-award",
        accent: "card-violet",
        body: "Computer Engineering Technology graduate with HND from The Polytechnic Ibadan and currently pursuing B.Tech at FUOYE. \
               Experienced Software Developer, Manager at 234Web Resources Nigeria Limited, and former Computer Laboratory Technician. \
               Passionate about creating innovative web solutions and building robust digital infrastructures.",
    },
    AboutCard {
        title: "My Approach",
        icon: "bi-rocket-takeoff",
        accent: "card-cyan",
        body: "Dedicated to working with effectiveness, determination, and diligence. I combine technical expertise with creative \
               problem-solving to deliver scalable solutions. From online conference management systems to robotic quality control, \
               I bring ideas to life through code and innovation.",
    },
];

pub const INFO: &[InfoCard] = &[
    InfoCard {
        title: "Technical Expertise",
        icon: "bi-code-square",
        body: "Software Developer with hands-on experience in web development, system design, and computer engineering. \
               Skilled in building conference management systems, robotic quality control systems, and full-stack web applications.",
    },
    InfoCard {
        title: "Professional Experience",
        icon: "bi-palette",
        body: "Manager at 234Web Resources & Device Xtra Gadget Stores | Former Instructor at Peak Integrated System | \
               Computer Lab Technician at Federal School of Statistics | NYSC Corps Member 2023",
    },
];

pub const STATS: &[Stat] = &[
    Stat { figure: "10+", label: "Projects", accent: "stat-violet" },
    Stat { figure: "6+", label: "Years Exp.", accent: "stat-cyan" },
    Stat { figure: "100+", label: "Clients", accent: "stat-fuchsia" },
];

pub const PORTFOLIO: Portfolio = Portfolio {
    profile: PROFILE,
    projects: PROJECTS,
    skills: SKILLS,
    socials: SOCIALS,
    tech: TECH,
    about: ABOUT,
    info: INFO,
    stats: STATS,
};

/// Sanity checks for hand-edited tables. Reports the first problem found.
pub fn validate(portfolio: &Portfolio) -> Result<()> {
    ensure!(!portfolio.profile.first_names.trim().is_empty(), "profile has no name");

    let mut names = HashSet::new();
    for skill in portfolio.skills {
        ensure!(skill.level <= 100, "skill `{}` has level {} (max 100)", skill.name, skill.level);
        if !names.insert(skill.name) {
            bail!("skill `{}` listed twice", skill.name);
        }
    }

    let mut titles = HashSet::new();
    for project in portfolio.projects {
        ensure!(!project.title.trim().is_empty(), "project with empty title");
        ensure!(!project.url.trim().is_empty(), "project `{}` has no url", project.title);
        if !titles.insert(project.title) {
            bail!("project `{}` listed twice", project.title);
        }
    }

    for social in portfolio.socials {
        ensure!(!social.url.trim().is_empty(), "social link `{}` has no url", social.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: &[Skill] = &[Skill { name: "Overclocking", level: 140, icon: "bi-cpu" }];
    const TWICE: &[Skill] = &[
        Skill { name: "Rust", level: 80, icon: "bi-gear" },
        Skill { name: "Rust", level: 60, icon: "bi-gear" },
    ];
    const NO_URL: &[Project] = &[Project {
        title: "Draft",
        description: "",
        url: " ",
        tags: &[],
        gradient: "",
    }];

    #[test]
    fn shipped_content_is_valid() {
        validate(&PORTFOLIO).unwrap();
    }

    #[test]
    fn shipped_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn rejects_level_above_hundred() {
        let err = validate(&Portfolio { skills: BROKEN, ..PORTFOLIO }).unwrap_err();
        assert!(err.to_string().contains("Overclocking"), "{err}");
    }

    #[test]
    fn rejects_duplicate_skill() {
        let err = validate(&Portfolio { skills: TWICE, ..PORTFOLIO }).unwrap_err();
        assert_eq!(err.to_string(), "skill `Rust` listed twice");
    }

    #[test]
    fn rejects_project_without_url() {
        let err = validate(&Portfolio { projects: NO_URL, ..PORTFOLIO }).unwrap_err();
        assert_eq!(err.to_string(), "project `Draft` has no url");
    }

    #[test]
    fn empty_tables_are_valid() {
        let empty = Portfolio {
            projects: &[],
            skills: &[],
            socials: &[],
            ..PORTFOLIO
        };
        validate(&empty).unwrap();
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(SKILLS[0].bar_style(), "width: 95%");
        assert_eq!(BROKEN[0].bar_style(), "width: 100%");
        assert_eq!(BROKEN[0].percent(), "140%");
    }

    #[test]
    fn profile_links_and_monogram() {
        assert_eq!(PROFILE.monogram(), 'A');
        assert_eq!(PROFILE.full_name(), "Arowolo Aliu Adekunle");
        assert_eq!(PROFILE.mailto(), "mailto:arowolo886@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:+2348145856060");

        let nameless = Profile { first_names: "  ", ..PROFILE };
        assert_eq!(nameless.monogram(), '?');
        let lower = Profile { first_names: "ada", ..PROFILE };
        assert_eq!(lower.monogram(), 'A');
    }

    #[test]
    fn contact_channels_follow_profile() {
        let moved = Profile {
            email: "hello@example.org",
            phone: "+15550100",
            phone_display: "+1 555 0100",
            location: "Lagos",
            ..PROFILE
        };
        let channels = moved.contact_channels();

        assert_eq!(channels.len(), 3);
        assert_eq!(channels[0].value, "hello@example.org");
        assert_eq!(channels[0].href.as_deref(), Some("mailto:hello@example.org"));
        assert_eq!(channels[1].value, "+1 555 0100");
        assert_eq!(channels[1].href.as_deref(), Some("tel:+15550100"));
        assert_eq!(channels[2].value, "Lagos");
        assert_eq!(channels[2].href, None);
    }
}
