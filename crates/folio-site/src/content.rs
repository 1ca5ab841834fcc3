//! Static portfolio content.
//!
//! Language-neutral facts live here; anything that reads as prose is looked
//! up through the translator with the keys these records carry.

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub photo: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_name: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub cv_file: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Mohamed Aziz Abidi",
    initials: "MA",
    photo: "assets/aziz-abid.jpeg",
    email: "azizabidilol7@gmail.com",
    phone: "+216 93 08 82 85",
    phone_href: "tel:+21693088285",
    linkedin_url: "https://linkedin.com/in/med-aziz-abidi",
    linkedin_name: "Mohamed Aziz Abidi",
    github_url: "https://github.com/MedAzizAbidii",
    github_handle: "MedAzizAbidii",
    cv_file: "Mohamed_Aziz_Abidi_CV.pdf",
};

/// Hero stats: figure and the translation key of its caption.
pub const STATS: [(&str, &str); 3] = [
    ("24", "hero.stats.age"),
    ("5+", "hero.stats.projects"),
    ("3", "hero.stats.internships"),
];

pub const ROTATOR_WORDS: [&str; 6] = [
    "Mobile Developer",
    "Full-Stack Developer",
    "Flutter Expert",
    "Blockchain Developer",
    "iOS Developer",
    "Problem Solver",
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "B.Eng. in Mobile Computer Systems",
        school: "ESPRIT - Private School of Engineering and Technology",
        period: "2021 - Present",
    },
    Education {
        degree: "Computer Science Baccalaureate",
        school: "High School of SOKRA",
        period: "2017 - 2021",
    },
];

/// Spoken languages and level.
pub const SPOKEN: [(&str, &str); 3] = [
    ("Arabic (Tunisian)", "Native"),
    ("French", "B2"),
    ("English", "B2"),
];

pub struct Experience {
    /// Translation key under `experiences.items`.
    pub key: &'static str,
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        key: "ige",
        technologies: &["Mobile Development", "Workflow Automation", "Backend Integration"],
    },
    Experience {
        key: "wanesAuto",
        technologies: &[
            "Cross-platform Development",
            "Web Development",
            "Database Management",
            "Role-based Access",
        ],
    },
    Experience {
        key: "telcotec",
        technologies: &["Flutter", "Node.js", "Mobile UI/UX", "Cross-platform Development"],
    },
    Experience {
        key: "snr",
        technologies: &["Arduino", "PCB Design", "Proteus", "Eagle", "Electronics"],
    },
];

impl Experience {
    pub fn field(&self, name: &str) -> String {
        format!("experiences.items.{}.{name}", self.key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectGroup {
    Internship,
    Academic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectKind {
    Mobile,
    Web,
    Blockchain,
    Desktop,
}

impl ProjectKind {
    pub fn icon(self) -> &'static str {
        match self {
            ProjectKind::Mobile => "📱",
            ProjectKind::Web => "🌐",
            ProjectKind::Blockchain => "⛓",
            ProjectKind::Desktop => "🖥",
        }
    }
}

/// Card tint; mirrors the six accents used on the project grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
            Accent::Success => "accent-success",
            Accent::Info => "accent-info",
            Accent::Warning => "accent-warning",
            Accent::Danger => "accent-danger",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    /// Translation key under `projects.items`.
    pub slug: &'static str,
    pub technologies: &'static [&'static str],
    pub kind: ProjectKind,
    pub group: ProjectGroup,
    pub year: &'static str,
    pub company: Option<&'static str>,
    pub featured: bool,
    pub accent: Accent,
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("projects.items.{}.title", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("projects.items.{}.description", self.slug)
    }
}

pub static INTERNSHIP_PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        slug: "leaveManagement",
        technologies: &["Flutter", "Mobile Development", "Backend Integration", "Push Notifications"],
        kind: ProjectKind::Mobile,
        group: ProjectGroup::Internship,
        year: "2025",
        company: Some("IGE International General Equipment"),
        featured: true,
        accent: Accent::Primary,
    },
    Project {
        id: 2,
        slug: "vehicleParts",
        technologies: &[
            "Cross-platform Development",
            "Web Development",
            "Database Management",
            "Role-based Access",
        ],
        kind: ProjectKind::Web,
        group: ProjectGroup::Internship,
        year: "2025",
        company: Some("wanes auto (Freelance)"),
        featured: false,
        accent: Accent::Secondary,
    },
    Project {
        id: 3,
        slug: "crowdSourcing",
        technologies: &["Flutter", "Node.js", "Mobile UI/UX", "Cross-platform Development"],
        kind: ProjectKind::Mobile,
        group: ProjectGroup::Internship,
        year: "2024",
        company: Some("telcotec Industries"),
        featured: false,
        accent: Accent::Success,
    },
];

pub static ACADEMIC_PROJECTS: [Project; 5] = [
    Project {
        id: 4,
        slug: "healthChain",
        technologies: &["Blockchain", "Smart Contracts", "Flutter", "NestJS", "Web3", "AI"],
        kind: ProjectKind::Blockchain,
        group: ProjectGroup::Academic,
        year: "2025",
        company: None,
        featured: true,
        accent: Accent::Primary,
    },
    Project {
        id: 5,
        slug: "chicCercle",
        technologies: &["iOS", "Android", "NestJS", "Weather API", "AI"],
        kind: ProjectKind::Mobile,
        group: ProjectGroup::Academic,
        year: "2025",
        company: None,
        featured: false,
        accent: Accent::Secondary,
    },
    Project {
        id: 6,
        slug: "affariety",
        technologies: &["JavaFX", "Symfony", "SQL", "PHP"],
        kind: ProjectKind::Web,
        group: ProjectGroup::Academic,
        year: "2024",
        company: None,
        featured: true,
        accent: Accent::Info,
    },
    Project {
        id: 7,
        slug: "cinema",
        technologies: &["HTML", "CSS", "PHP", "SQL"],
        kind: ProjectKind::Web,
        group: ProjectGroup::Academic,
        year: "2022",
        company: None,
        featured: false,
        accent: Accent::Warning,
    },
    Project {
        id: 8,
        slug: "game2d",
        technologies: &["C", "SDL", "Game Development"],
        kind: ProjectKind::Desktop,
        group: ProjectGroup::Academic,
        year: "2021-2022",
        company: None,
        featured: false,
        accent: Accent::Danger,
    },
];

/// Project groups in display order.
pub fn project_groups() -> [(ProjectGroup, &'static [Project]); 2] {
    [
        (ProjectGroup::Internship, &INTERNSHIP_PROJECTS),
        (ProjectGroup::Academic, &ACADEMIC_PROJECTS),
    ]
}

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct SkillCategory {
    /// Translation key under `skills.categories`.
    pub key: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn title_key(&self) -> String {
        format!("skills.categories.{}.title", self.key)
    }
}

impl Skill {
    /// Two-letter badge shown when the icon cannot be loaded.
    pub fn monogram(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

macro_rules! devicon {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            icon: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $path),
        }
    };
}

pub static SKILLS: [SkillCategory; 6] = [
    SkillCategory {
        key: "languages",
        icon: "</>",
        skills: &[
            devicon!("Java", "java/java-original.svg"),
            devicon!("JavaScript", "javascript/javascript-original.svg"),
            devicon!("TypeScript", "typescript/typescript-original.svg"),
            devicon!("Swift", "swift/swift-original.svg"),
            devicon!("Dart", "dart/dart-original.svg"),
            devicon!("Kotlin", "kotlin/kotlin-original.svg"),
            devicon!("C++", "cplusplus/cplusplus-original.svg"),
            devicon!("Python", "python/python-original.svg"),
            devicon!("PHP", "php/php-original.svg"),
            devicon!("C", "c/c-original.svg"),
        ],
    },
    SkillCategory {
        key: "mobile",
        icon: "📱",
        skills: &[
            devicon!("Flutter", "flutter/flutter-original.svg"),
            devicon!("SwiftUI", "swift/swift-original.svg"),
            Skill {
                name: "UIKit",
                icon: "https://developer.apple.com/assets/elements/icons/uikit/uikit-96x96_2x.png",
            },
            devicon!("Android", "android/android-original.svg"),
            devicon!("React Native", "react/react-original.svg"),
            devicon!("iOS", "apple/apple-original.svg"),
        ],
    },
    SkillCategory {
        key: "web",
        icon: "🌐",
        skills: &[
            devicon!("React", "react/react-original.svg"),
            devicon!("Next.js", "nextjs/nextjs-original.svg"),
            devicon!("NestJS", "nestjs/nestjs-plain.svg"),
            devicon!("Spring Boot", "spring/spring-original.svg"),
            devicon!("HTML5", "html5/html5-original.svg"),
            devicon!("CSS3", "css3/css3-original.svg"),
            devicon!("Symfony", "symfony/symfony-original.svg"),
            devicon!("Node.js", "nodejs/nodejs-original.svg"),
            devicon!("Vue.js", "vuejs/vuejs-original.svg"),
        ],
    },
    SkillCategory {
        key: "databases",
        icon: "🗄",
        skills: &[
            devicon!("MySQL", "mysql/mysql-original.svg"),
            devicon!("MongoDB", "mongodb/mongodb-original.svg"),
            devicon!("Firebase", "firebase/firebase-plain.svg"),
            devicon!("PostgreSQL", "postgresql/postgresql-original.svg"),
            devicon!("SQLite", "sqlite/sqlite-original.svg"),
        ],
    },
    SkillCategory {
        key: "devops",
        icon: "🔧",
        skills: &[
            devicon!("Docker", "docker/docker-original.svg"),
            devicon!("Git", "git/git-original.svg"),
            devicon!("Jenkins", "jenkins/jenkins-original.svg"),
            devicon!("Linux", "linux/linux-original.svg"),
            devicon!("Arduino", "arduino/arduino-original.svg"),
            devicon!("VS Code", "vscode/vscode-original.svg"),
            devicon!("Figma", "figma/figma-original.svg"),
        ],
    },
    SkillCategory {
        key: "ai",
        icon: "🧠",
        skills: &[
            devicon!("TensorFlow", "tensorflow/tensorflow-original.svg"),
            devicon!("Gemini AI", "google/google-original.svg"),
            Skill {
                name: "OpenAI",
                icon: "https://upload.wikimedia.org/wikipedia/commons/4/4d/OpenAI_Logo.svg",
            },
            devicon!("Jupyter", "jupyter/jupyter-original.svg"),
        ],
    },
];
