//! Hard-coded page content.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLinks {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub facebook: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub email: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub avatar_url: &'static str,
    pub cv_url: &'static str,
    pub whatsapp_url: &'static str,
    pub contact_email: &'static str,
    pub phone: &'static str,
    pub socials: SocialLinks,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Laptop,
    Server,
    Database,
    Wrench,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [Skill],
}

pub const PROFILE: Profile = Profile {
    name: "Mostafa Nasser",
    title: "Full Stack Web Developer",
    tagline: "Building modern web applications with Laravel and React. Passionate about creating efficient, scalable solutions.",
    avatar_url: "/profile.png",
    cv_url: "https://drive.google.com/file/d/1iaNrdYtFnxthZXuy8dvaBBXdGFZfn6Mz/view?usp=sharing",
    whatsapp_url: "https://wa.me/201284036860",
    contact_email: "mostafakms1641996@gmail.com",
    phone: "+201284036860",
    socials: SocialLinks {
        github: Some("https://github.com/mostafanasser"),
        linkedin: Some("https://www.linkedin.com/in/mostafakms/"),
        facebook: Some("https://www.facebook.com/mostafakms1"),
        twitter: Some("https://twitter.com"),
        email: Some("mailto:mostafa.nasser.dev@gmail.com"),
    },
};

pub const GITHUB_PROFILE: &str = "https://github.com/mostafanasser";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Social Media Services Dashboard",
        description: "A comprehensive dashboard for managing social media services with analytics, user management, and service tracking.",
        image: "/Social Media Services Dashboard.png",
        technologies: &["React", "Laravel", "MySQL", "Tailwind CSS"],
        demo_url: Some("https://social-media-services-dashboard.vercel.app/"),
        github_url: Some(GITHUB_PROFILE),
    },
    Project {
        id: "2",
        title: "Social Media Services Frontend",
        description: "Modern frontend application for social media services with responsive design and intuitive user interface.",
        image: "/Social Media Services Frontend.png",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
        demo_url: Some("https://social-media-services-front-end.vercel.app/"),
        github_url: Some(GITHUB_PROFILE),
    },
    Project {
        id: "3",
        title: "Medical Lab Management System",
        description: "A complete medical laboratory management system with patient records, test management, and reporting features.",
        image: "/Medical Lab Management System.png",
        technologies: &["Laravel", "PHP", "MySQL", "Bootstrap"],
        demo_url: Some("https://medicallabv2-7747.vercel.app/"),
        github_url: Some(GITHUB_PROFILE),
    },
];

const fn skill(name: &'static str, level: u8, tags: &'static [&'static str]) -> Skill {
    Skill { name, level, tags }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        icon: SkillIcon::Laptop,
        skills: &[
            skill("React", 75, &["Framework", "UI"]),
            skill("JavaScript", 80, &["Language"]),
            skill("HTML/CSS", 85, &["Markup", "Styling"]),
            skill("Tailwind CSS", 70, &["Framework", "Styling"]),
            skill("Bootstrap", 75, &["Framework"]),
        ],
    },
    SkillCategory {
        name: "Backend",
        icon: SkillIcon::Server,
        skills: &[
            skill("Laravel", 80, &["Framework"]),
            skill("PHP", 85, &["Language"]),
            skill("Node.js", 65, &["Runtime"]),
            skill("REST API", 75, &["API"]),
            skill("MVC Architecture", 80, &["Pattern"]),
        ],
    },
    SkillCategory {
        name: "Database",
        icon: SkillIcon::Database,
        skills: &[
            skill("MySQL", 80, &["SQL"]),
            skill("PostgreSQL", 70, &["SQL"]),
            skill("Database Design", 75, &["Design"]),
            skill("Eloquent ORM", 80, &["ORM"]),
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        icon: SkillIcon::Wrench,
        skills: &[
            skill("Git", 75, &["Version Control"]),
            skill("Composer", 80, &["Package Manager"]),
            skill("npm/Yarn", 75, &["Package Manager"]),
            skill("Postman", 70, &["API Testing"]),
            skill("VS Code", 85, &["IDE"]),
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Responsive Design",
    "Problem Solving",
    "Team Collaboration",
    "Learning Mindset",
    "Code Review",
    "Documentation",
    "Debugging",
    "Web Security",
    "Performance Optimization",
    "Clean Code",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.name);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} level {}", skill.name, skill.level);
            }
        }
    }
}
