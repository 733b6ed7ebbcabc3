//! The project catalog shown on the Tools page.
//!
//! Authored order is display order. Filtering and partitioning are stable,
//! so nothing downstream may sort or dedupe this list.

use once_cell::sync::Lazy;

use super::types::{Category, Tool};

static CATALOG: Lazy<Vec<Tool>> = Lazy::new(|| {
    vec![
        Tool {
            id: "1",
            title: "Task Management Dashboard",
            description: "A modern task management application with real-time collaboration features.",
            long_description: "Built with React and Node.js, this dashboard provides teams with powerful project management capabilities including real-time updates, drag-and-drop task organization, and comprehensive reporting features.",
            technologies: &["React", "Node.js", "TypeScript", "WebSocket", "MongoDB"],
            github_url: "https://github.com/username/task-dashboard",
            live_url: Some("https://task-dashboard-demo.com"),
            image_url: "/api/placeholder/600/400",
            featured: true,
            category: Category::WebApp,
        },
        Tool {
            id: "2",
            title: "API Gateway Service",
            description: "A high-performance API gateway with rate limiting and authentication.",
            long_description: "Microservices architecture solution built with Go, featuring intelligent load balancing, comprehensive monitoring, and advanced security features for enterprise-grade applications.",
            technologies: &["Go", "Redis", "Docker", "Kubernetes", "gRPC"],
            github_url: "https://github.com/username/api-gateway",
            live_url: None,
            image_url: "/api/placeholder/600/400",
            featured: true,
            category: Category::Backend,
        },
        Tool {
            id: "3",
            title: "Data Visualization Library",
            description: "A lightweight, customizable charting library for modern web applications.",
            long_description: "TypeScript-first data visualization library that provides beautiful, interactive charts with minimal setup. Optimized for performance and accessibility with extensive customization options.",
            technologies: &["TypeScript", "D3.js", "Canvas API", "WebGL"],
            github_url: "https://github.com/username/viz-library",
            live_url: Some("https://viz-library-docs.com"),
            image_url: "/api/placeholder/600/400",
            featured: false,
            category: Category::Library,
        },
        Tool {
            id: "4",
            title: "Mobile Analytics SDK",
            description: "Cross-platform analytics SDK for mobile applications.",
            long_description: "Comprehensive analytics solution for React Native and Flutter applications, providing detailed user behavior insights, crash reporting, and performance monitoring.",
            technologies: &["React Native", "Flutter", "Kotlin", "Swift", "Firebase"],
            github_url: "https://github.com/username/mobile-analytics",
            live_url: None,
            image_url: "/api/placeholder/600/400",
            featured: false,
            category: Category::Mobile,
        },
        Tool {
            id: "5",
            title: "CI/CD Pipeline Optimizer",
            description: "Tool for optimizing continuous integration and deployment workflows.",
            long_description: "Python-based automation tool that analyzes and optimizes CI/CD pipelines, reducing build times by up to 60% while maintaining reliability and security standards.",
            technologies: &["Python", "GitHub Actions", "Jenkins", "Docker", "AWS"],
            github_url: "https://github.com/username/cicd-optimizer",
            live_url: None,
            image_url: "/api/placeholder/600/400",
            featured: false,
            category: Category::DevOps,
        },
        Tool {
            id: "6",
            title: "Real-time Chat Engine",
            description: "Scalable real-time messaging infrastructure for web and mobile apps.",
            long_description: "High-performance messaging system built with WebSockets and Redis, supporting thousands of concurrent connections with features like message encryption, file sharing, and bot integration.",
            technologies: &["Node.js", "WebSocket", "Redis", "PostgreSQL", "Docker"],
            github_url: "https://github.com/username/chat-engine",
            live_url: Some("https://chat-engine-demo.com"),
            image_url: "/api/placeholder/600/400",
            featured: true,
            category: Category::Backend,
        },
    ]
});

/// Returns the full catalog in authored order.
pub fn all_tools() -> &'static [Tool] {
    &CATALOG
}

/// Look up a single entry by its stable id.
pub fn tool_by_id(id: &str) -> Option<&'static Tool> {
    CATALOG.iter().find(|tool| tool.id == id)
}
