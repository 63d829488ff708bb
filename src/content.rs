// Static site content. Copy and data live here, components only lay it out.

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub brand_accent: &'static str,
    pub tagline: &'static str,
    pub cv_href: &'static str,
    pub cv_file_name: &'static str,
    pub copyright_note: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct Skill {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub repository_url: Option<&'static str>,
}

#[derive(PartialEq, Debug)]
pub struct ContactLink {
    pub glyph: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub in_footer: bool,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Morgan",
    brand: "main.",
    brand_accent: "rs",
    tagline: "I architect scalable, performant web interfaces using modern frameworks, \
              component-driven design, and a UX-first approach.",
    cv_href: "/cv.pdf",
    cv_file_name: "Alex_Morgan_CV.pdf",
    copyright_note: "Unauthorized cloning may cause bugs.",
};

pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        glyph: "</>",
        title: "UI Engineering",
        description: "Building complex interfaces with clean, maintainable code and \
                      component-based architecture.",
    },
    Skill {
        glyph: "◐",
        title: "Design Systems",
        description: "Creating scalable design systems that ensure consistency across \
                      digital products.",
    },
    Skill {
        glyph: "⚡",
        title: "Performance",
        description: "Optimizing for speed and efficiency to deliver exceptional user \
                      experiences.",
    },
    Skill {
        glyph: "▣",
        title: "Accessibility",
        description: "Ensuring interfaces are usable by everyone, regardless of ability \
                      or context.",
    },
];

const IMAGE_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Dashboard",
        description: "A modern dashboard for managing products, orders, and customers \
                      with real-time analytics.",
        image: "https://images.pexels.com/photos/5473298/pexels-photo-5473298.jpeg",
        technologies: &["Rust", "Yew", "stylist", "Charts"],
        live_url: Some("https://example.com/project1"),
        repository_url: Some("https://github.com/example/project1"),
    },
    Project {
        id: 2,
        title: "Design System Library",
        description: "A comprehensive component library and design system for rapid \
                      application development.",
        image: "https://images.pexels.com/photos/4386441/pexels-photo-4386441.jpeg",
        technologies: &["Yew", "Storybook", "CSS-in-Rust", "wasm-bindgen-test"],
        live_url: Some("https://example.com/project2"),
        repository_url: Some("https://github.com/example/project2"),
    },
    Project {
        id: 3,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates \
                      and progress tracking.",
        image: "https://images.pexels.com/photos/6956483/pexels-photo-6956483.jpeg",
        technologies: &["Axum", "WebSocket", "Yew", "SQLite"],
        live_url: Some("https://example.com/project3"),
        repository_url: Some("https://github.com/example/project3"),
    },
    Project {
        id: 4,
        title: "News Aggregator",
        description: "A personalized news application that collects and categorizes \
                      articles from various sources.",
        image: "https://images.pexels.com/photos/518543/pexels-photo-518543.jpeg",
        technologies: &["Tokio", "reqwest", "Postgres", "Yew"],
        live_url: Some("https://example.com/project4"),
        repository_url: Some("https://github.com/example/project4"),
    },
    Project {
        id: 5,
        title: "Weather Visualization",
        description: "An interactive weather application with visualizations and \
                      7-day forecasts.",
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg",
        technologies: &["Yew", "Canvas", "OpenWeather API"],
        live_url: Some("https://example.com/project5"),
        repository_url: None,
    },
    Project {
        id: 6,
        title: "Portfolio Website",
        description: "A minimalist portfolio showcasing creative work and projects with \
                      smooth animations.",
        image: "https://images.pexels.com/photos/5926382/pexels-photo-5926382.jpeg",
        technologies: &["Rust", "Yew", "stylist"],
        live_url: None,
        repository_url: Some("https://github.com/example/portfolio"),
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        glyph: "✉",
        label: "hello@example.com",
        href: "mailto:hello@example.com",
        in_footer: false,
    },
    ContactLink {
        glyph: "⌥",
        label: "github.com/example",
        href: "https://github.com/example",
        in_footer: true,
    },
    ContactLink {
        glyph: "𝕏",
        label: "x.com/example",
        href: "https://x.com/example",
        in_footer: true,
    },
    ContactLink {
        glyph: "in",
        label: "linkedin.com/in/example",
        href: "https://www.linkedin.com/in/example",
        in_footer: true,
    },
];

impl Project {
    pub fn image_url(&self) -> String {
        format!("{}{}", self.image, IMAGE_PARAMS)
    }
}

pub fn footer_links() -> impl Iterator<Item = &'static ContactLink> {
    CONTACT_LINKS.iter().filter(|link| link.in_footer)
}

pub fn external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_anchors() {
        let ids: HashSet<_> = SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
        for section in SECTIONS {
            assert_eq!(section.id, section.label.to_lowercase());
        }
    }

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_lists_technologies() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(project.image_url().ends_with(IMAGE_PARAMS));
        }
    }

    #[test]
    fn mail_link_stays_out_of_footer() {
        assert!(footer_links().all(|link| external(link.href)));
        assert!(CONTACT_LINKS
            .iter()
            .any(|link| link.href.starts_with("mailto:")));
    }
}
