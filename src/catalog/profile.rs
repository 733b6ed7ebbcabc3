//! Home-page copy: hero text, skill areas, project teasers, contact links.

use super::types::{Highlight, Profile, Skill};

pub const PROFILE: Profile = Profile {
    name: "Alex",
    tagline: "Full-Stack Developer & Technical Architect",
    summary: "I craft exceptional digital experiences through innovative web and mobile applications. Passionate about clean code, scalable architecture, and solving complex technical challenges.",
    contact_heading: "Let's Build Something Amazing",
    contact_pitch: "Ready to bring your ideas to life? I'm always excited to discuss new projects and collaboration opportunities.",
    github: "https://github.com/username",
    linkedin: "https://linkedin.com/in/username",
    email: "alex@example.com",
};

pub const SKILLS: [Skill; 4] = [
    Skill {
        name: "Frontend Development",
        description: "React, TypeScript, Next.js, Vue.js",
    },
    Skill {
        name: "Backend Development",
        description: "Node.js, Python, Go, PostgreSQL, MongoDB",
    },
    Skill {
        name: "Mobile Development",
        description: "React Native, Flutter, iOS, Android",
    },
    Skill {
        name: "DevOps & Cloud",
        description: "AWS, Docker, Kubernetes, CI/CD",
    },
];

/// Teasers for the home page; full records live in the catalog.
pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Task Management Dashboard",
        description: "Real-time collaborative project management platform",
        technologies: &["React", "Node.js", "WebSocket"],
        featured: true,
    },
    Highlight {
        title: "API Gateway Service",
        description: "High-performance microservices gateway",
        technologies: &["Go", "Redis", "Docker"],
        featured: true,
    },
    Highlight {
        title: "Mobile Analytics SDK",
        description: "Cross-platform analytics solution",
        technologies: &["React Native", "Firebase"],
        featured: false,
    },
];
