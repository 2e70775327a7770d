//! Static page content. Everything here is a compile-time constant; the
//! components in `app` only iterate these tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
    Yellow,
    LightBlue,
    Teal,
    DarkGray,
}

impl Accent {
    /// Background fill class. Kept as full literals so tailwind picks them up.
    pub const fn bg_class(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-500",
            Accent::Purple => "bg-purple-500",
            Accent::Green => "bg-green-500",
            Accent::Orange => "bg-orange-500",
            Accent::Yellow => "bg-yellow-400",
            Accent::LightBlue => "bg-sky-400",
            Accent::Teal => "bg-teal-500",
            Accent::DarkGray => "bg-gray-600",
        }
    }

    pub const fn text_class(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-400",
            Accent::Purple => "text-purple-400",
            Accent::Green => "text-green-400",
            Accent::Orange => "text-orange-400",
            Accent::Yellow => "text-yellow-300",
            Accent::LightBlue => "text-sky-300",
            Accent::Teal => "text-teal-400",
            Accent::DarkGray => "text-gray-400",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub logo_src: &'static str,
    pub photo_src: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ahil Danai",
    role: "Frontend Developer",
    tagline: "Passionate about creating intuitive, responsive web experiences using modern frontend technologies.",
    logo_src: "/logo.png",
    photo_src: "/ahil-danai.jpg",
};

pub const SUMMARY: [&str; 2] = [
    "Passionate and skilled Frontend Developer with 1 year and 6 months of professional experience, plus 6 months internship.",
    "Proficient in HTML5, CSS3, Bootstrap, JavaScript, jQuery, React, and various frontend libraries. Experienced in working with APIs, AJAX, and Postman for seamless web integration and dynamic applications.",
];

pub struct Feature {
    pub icon: &'static str,
    pub accent: Accent,
    pub title: &'static str,
    pub text: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "💻",
        accent: Accent::Blue,
        title: "Modern Tech Stack",
        text: "Expertise in cutting-edge frontend technologies and frameworks",
    },
    Feature {
        icon: "💼",
        accent: Accent::Purple,
        title: "Professional Experience",
        text: "Real-world development experience building applications",
    },
    Feature {
        icon: "🎓",
        accent: Accent::Green,
        title: "Continuous Learning",
        text: "Currently pursuing B.Voc in Information Technology",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Internship,
    Job,
}

impl Marker {
    pub const fn icon(self) -> &'static str {
        match self {
            Marker::Internship => "🎓",
            Marker::Job => "💼",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Marker::Internship => "bg-purple-600",
            Marker::Job => "bg-blue-600",
        }
    }
}

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub marker: Marker,
    pub highlights: &'static [&'static str],
}

// oldest first, matching the timeline's top-to-bottom reading order
pub static EXPERIENCE: [Role; 2] = [
    Role {
        title: "Frontend Development Intern",
        company: "Ordereasy Techsolutions",
        duration: "6 months",
        marker: Marker::Internship,
        highlights: &[
            "Assisted in designing and coding front-end features using HTML5, CSS3, JavaScript, and jQuery",
            "Supported the development team in testing APIs with Postman and debugging AJAX requests",
            "Contributed to UI/UX improvements for better user engagement and experience",
        ],
    },
    Role {
        title: "Frontend Developer",
        company: "Ordereasy Techsolutions",
        duration: "1 year 2 months",
        marker: Marker::Job,
        highlights: &[
            "Developed responsive user interfaces using React, Bootstrap, and custom CSS",
            "Integrated multiple third-party APIs to enhance application functionality",
            "Implemented AJAX calls to provide dynamic content updates without page reloads",
            "Collaborated with backend developers to ensure smooth API communication",
            "Maintained and improved existing codebase ensuring high performance",
        ],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub years: &'static str,
    pub status: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "B.Voc in Information Technology",
    years: "2023–2026",
    status: "Currently in Semester 5",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
    pub accent: Accent,
}

impl Skill {
    pub const fn new(name: &'static str, level: u8, accent: Accent) -> Self {
        Self {
            name,
            level,
            accent,
        }
    }

    /// Proficiency percentage, clamped to 100.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }

    /// Share of the bar track that is filled.
    pub fn bar_fraction(&self) -> f64 {
        f64::from(self.level()) / 100.0
    }

    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level())
    }

    pub fn level_label(&self) -> String {
        format!("{}%", self.level())
    }
}

pub static SKILLS: [Skill; 8] = [
    Skill::new("HTML5", 90, Accent::Orange),
    Skill::new("CSS3", 85, Accent::Blue),
    Skill::new("JavaScript", 80, Accent::Yellow),
    Skill::new("React", 85, Accent::LightBlue),
    Skill::new("Bootstrap", 80, Accent::Purple),
    Skill::new("CSS", 75, Accent::Teal),
    Skill::new("API Integration", 80, Accent::Green),
    Skill::new("Git/GitHub", 75, Accent::DarkGray),
];

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub accent: Accent,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "E-commerce Dashboard",
        description: "A responsive dashboard for e-commerce analytics with real-time data visualization.",
        technologies: &["React", "CSS", "Chart.js", "RESTful API"],
        accent: Accent::Blue,
    },
    Project {
        id: 2,
        title: "Social Media App",
        description: "Feature-rich social platform with real-time messaging and content sharing.",
        technologies: &["React", "Socket.io", "Express", "MongoDB"],
        accent: Accent::Purple,
    },
    Project {
        id: 3,
        title: "Weather Forecast Application",
        description: "Dynamic weather application with location-based forecasting and interactive maps.",
        technologies: &["React", "OpenWeather API", "Leaflet.js", "Geolocation API"],
        accent: Accent::Green,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
}

impl ContactKind {
    pub const fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::LinkedIn => "LinkedIn",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "📧",
            ContactKind::Phone => "📞",
            ContactKind::LinkedIn => "🔗",
        }
    }
}

pub struct ContactLink {
    pub kind: ContactKind,
    pub display: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Web profiles open in a new browsing context; `mailto:`/`tel:` don't.
    pub fn opens_new_context(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::Email,
        display: "ahildanai@gmail.com",
        href: "mailto:ahildanai@gmail.com",
    },
    ContactLink {
        kind: ContactKind::Phone,
        display: "+91 8780313381",
        href: "tel:8780313381",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        display: "Ahil Danai",
        href: "https://www.linkedin.com/in/ahil-danai-bb2843340/",
    },
];

pub fn copyright_line(year: &str) -> String {
    format!("© {} {}. All rights reserved.", year, PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_bar_width() {
        let skill = Skill::new("CSS3", 85, Accent::Blue);
        assert_eq!(skill.bar_style(), "width: 85%");
        assert_eq!(skill.level_label(), "85%");
        assert!((skill.bar_fraction() - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_skill_level_clamped() {
        let skill = Skill::new("Overconfident", 140, Accent::Teal);
        assert_eq!(skill.level(), 100);
        assert_eq!(skill.bar_style(), "width: 100%");
        assert_eq!(Skill::new("Nothing", 0, Accent::Teal).level_label(), "0%");
    }

    #[test]
    fn test_skills_in_range() {
        assert_eq!(SKILLS.len(), 8);
        for skill in SKILLS.iter() {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
        assert_eq!(SKILLS[0].name, "HTML5");
        assert_eq!(SKILLS[0].level_label(), "90%");
    }

    #[test]
    fn test_projects_ordered() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            PROJECTS[2].technologies,
            &["React", "OpenWeather API", "Leaflet.js", "Geolocation API"]
        );
    }

    #[test]
    fn test_contact_link_targets() {
        let new_context = CONTACT_LINKS
            .iter()
            .filter(|l| l.opens_new_context())
            .map(|l| l.kind)
            .collect::<Vec<_>>();
        assert_eq!(new_context, vec![ContactKind::LinkedIn]);
        assert!(CONTACT_LINKS[0].href.starts_with("mailto:"));
        assert!(CONTACT_LINKS[1].href.starts_with("tel:"));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("2026"),
            "© 2026 Ahil Danai. All rights reserved."
        );
    }
}
