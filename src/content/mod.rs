// SPDX-License-Identifier: MPL-2.0
//! Static showcase content.
//!
//! Everything the screens render that is data rather than chrome lives here
//! as typed constants: team bios, tool descriptions, portfolio projects,
//! design principles, and the word/tip pools the games draw from.

/// Headline typed out on the hero screen.
pub const HEADLINE: &str = "Rohan, Ashrith & Mahesh";

/// A member of the team presented on the home and team screens.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: &'static [&'static str],
    pub experience: &'static str,
    pub superpower: &'static str,
    pub fun_fact: &'static str,
    /// Accent used for the procedural avatar.
    pub accent: (u8, u8, u8),
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Rohan Siddardha",
        role: "Senior UI Developer",
        bio: "Passionate about creating pixel-perfect interfaces that users love. \
              Specializes in design systems and accessibility.",
        skills: &["Rust", "Iced", "Figma", "Design Systems", "Accessibility"],
        experience: "3+ years",
        superpower: "Pixel-Perfect Precision",
        fun_fact: "Can spot a 1px misalignment from across the room",
        accent: (148, 92, 235),
    },
    TeamMember {
        name: "Ashrith Reddy",
        role: "UI Animation Specialist",
        bio: "Brings interfaces to life with smooth animations and \
              micro-interactions. Expert in rendering performance.",
        skills: &["Rust", "Canvas", "Easing Curves", "Shaders", "Performance"],
        experience: "4+ years",
        superpower: "Animation Wizard",
        fun_fact: "Dreams in 60fps and wakes up thinking about easing curves",
        accent: (237, 71, 153),
    },
    TeamMember {
        name: "Mahesh Yadav",
        role: "UX-Focused Developer",
        bio: "Bridges the gap between design and development. Focused on \
              creating intuitive experiences through thoughtful code.",
        skills: &["Rust", "User Research", "Prototyping", "A/B Testing", "Analytics"],
        experience: "3+ years",
        superpower: "UX Mind Reader",
        fun_fact: "Can predict user behavior before users know what they want",
        accent: (100, 150, 255),
    },
];

/// One animated statistic on the why-UI screen.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub title: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        title: "Users form first impressions",
        value: 94,
        suffix: "%",
        description: "in 0.05 seconds based on visual design",
    },
    Stat {
        title: "Increase in engagement",
        value: 75,
        suffix: "%",
        description: "with intuitive UI design",
    },
    Stat {
        title: "Boost in conversions",
        value: 85,
        suffix: "%",
        description: "with optimized user interfaces",
    },
];

/// A labeled impact metric rendered as a progress bar.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub label: &'static str,
    pub percent: u32,
}

pub const METRICS: [Metric; 3] = [
    Metric {
        label: "User Satisfaction",
        percent: 94,
    },
    Metric {
        label: "Task Completion Rate",
        percent: 87,
    },
    Metric {
        label: "Return User Rate",
        percent: 76,
    },
];

/// A design principle with supporting points.
#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

pub const PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "First Impressions Matter",
        description: "UI is the first thing users see and judge. A stunning \
                      interface hooks users in seconds and sets the tone for \
                      their entire experience.",
        points: &[
            "Users decide in 0.05 seconds if they like your app",
            "Visual hierarchy guides user attention",
            "Consistent branding builds trust",
        ],
    },
    Principle {
        title: "Great UI Boosts Engagement",
        description: "Intuitive designs keep users coming back. When interfaces \
                      are easy to use and visually appealing, users spend more \
                      time exploring.",
        points: &[
            "Reduced cognitive load improves satisfaction",
            "Clear navigation increases screen views",
            "Interactive elements encourage exploration",
        ],
    },
    Principle {
        title: "UI Drives Conversions",
        description: "Seamless flows turn clicks into customers. Well-designed \
                      interfaces remove friction and guide users toward desired \
                      actions.",
        points: &[
            "Clear calls to action increase click-through rates",
            "Optimized forms reduce abandonment",
            "Trust signals boost purchase confidence",
        ],
    },
];

/// An entry in the tool grid on the modern-tools screen.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub category: &'static str,
}

pub const TOOLS: [Tool; 6] = [
    Tool {
        name: "Anima",
        description: "Design-to-code automation tool that converts Figma designs \
                      into responsive component code",
        features: &[
            "Auto-generated components",
            "Responsive layouts",
            "Clean, maintainable code",
            "Figma integration",
        ],
        category: "Design-to-Code",
    },
    Tool {
        name: "Figma",
        description: "Collaborative interface design tool with live multiplayer \
                      editing",
        features: &[
            "Real-time collaboration",
            "Component variants",
            "Auto layout",
            "Prototyping",
        ],
        category: "Design",
    },
    Tool {
        name: "Rust",
        description: "Systems language powering fast, reliable interface \
                      implementations",
        features: &[
            "Memory safety",
            "Fearless refactoring",
            "Great tooling",
            "Strong ecosystem",
        ],
        category: "Language",
    },
    Tool {
        name: "Iced",
        description: "Cross-platform GUI toolkit focused on simplicity and \
                      type safety",
        features: &[
            "The Elm Architecture",
            "First-class theming",
            "Canvas drawing",
            "Async tasks",
        ],
        category: "Framework",
    },
    Tool {
        name: "Storybook",
        description: "Isolated component workshop for building and documenting UI",
        features: &[
            "Component isolation",
            "Visual testing",
            "Living documentation",
            "Addon ecosystem",
        ],
        category: "Workshop",
    },
    Tool {
        name: "Design Tokens",
        description: "A single source of truth for colors, spacing, and typography",
        features: &[
            "Consistent spacing scales",
            "Theme switching",
            "Cross-platform export",
            "Automated validation",
        ],
        category: "System",
    },
];

/// A takeaway card shown above the tool grid.
#[derive(Debug, Clone, Copy)]
pub struct Takeaway {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TAKEAWAYS: [Takeaway; 4] = [
    Takeaway {
        title: "Speed",
        description: "Automated design-to-code accelerates the UI build process by 70%",
    },
    Takeaway {
        title: "Accuracy",
        description: "Fewer visual bugs, because you work from real designs, not redlines",
    },
    Takeaway {
        title: "Focus",
        description: "Spend energy on complex logic and performance instead of layout grunt work",
    },
    Takeaway {
        title: "Team Benefit",
        description: "Shortens the feedback loop between design and development",
    },
];

/// One old-way/new-way row on the old-vs-new screen.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowShift {
    pub old: &'static str,
    pub new: &'static str,
}

pub const WORKFLOW_SHIFTS: [WorkflowShift; 5] = [
    WorkflowShift {
        old: "Manual design-to-code handoff",
        new: "Automated conversion pipelines",
    },
    WorkflowShift {
        old: "Hand-coded layout from scratch",
        new: "Auto-generated responsive UI",
    },
    WorkflowShift {
        old: "Pixel-perfect tweaking",
        new: "Design fidelity from day one",
    },
    WorkflowShift {
        old: "Long dev/design feedback loops",
        new: "Rapid iteration with live previews",
    },
    WorkflowShift {
        old: "Time spent on boilerplate",
        new: "Focus on logic, UX, and performance",
    },
];

/// Project category used by the portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
}

/// A portfolio project with its case-study details.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub challenge: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    /// Accent used for the procedural before/after artwork.
    pub accent: (u8, u8, u8),
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "E-Commerce Redesign",
        category: Category::Web,
        description: "Complete redesign of an e-commerce platform focusing on \
                      conversion optimization and user experience.",
        technologies: &["Rust", "Iced", "Design Tokens", "Stripe"],
        challenge: "Low conversion rates and poor mobile experience",
        solution: "Implemented modern design patterns and optimized the checkout flow",
        impact: "Increased conversions by 150% and reduced bounce rate by 40%",
        accent: (148, 92, 235),
    },
    Project {
        id: 2,
        title: "Healthcare Dashboard",
        category: Category::Web,
        description: "Intuitive dashboard for healthcare professionals to manage \
                      patient data and appointments.",
        technologies: &["Rust", "Charts", "Design System", "Analytics"],
        challenge: "Complex data visualization and workflow management",
        solution: "Created intuitive data visualizations and streamlined workflows",
        impact: "Reduced task completion time by 60% and improved satisfaction",
        accent: (100, 150, 255),
    },
    Project {
        id: 3,
        title: "Fitness Mobile App",
        category: Category::Mobile,
        description: "Gamified fitness tracking app with social features and \
                      personalized workout plans.",
        technologies: &["Rust", "Animations", "Gamification", "Social"],
        challenge: "User engagement and motivation retention",
        solution: "Implemented gamification and social features",
        impact: "Achieved 85% user retention and a 4.8 store rating",
        accent: (237, 71, 153),
    },
    Project {
        id: 4,
        title: "Banking Interface",
        category: Category::Web,
        description: "Secure and accessible banking interface with advanced \
                      security features and intuitive design.",
        technologies: &["Rust", "Security", "Accessibility", "Forms"],
        challenge: "Security concerns and complex financial operations",
        solution: "Balanced security with usability and clear visual hierarchy",
        impact: "Reduced support calls by 45% and improved transaction success",
        accent: (67, 179, 103),
    },
];

/// Tips shared by the spinning wheel and the portfolio tip generator.
pub const DESIGN_TIPS: [&str; 8] = [
    "Use consistent spacing throughout your design",
    "Color contrast is key",
    "Animations delight users",
    "White space matters",
    "Typography sets mood",
    "Micro-interactions shine",
    "Mobile-first approach",
    "Accessibility for all",
];

/// Longer tips for the portfolio random-tip generator.
pub const UI_TIPS: [&str; 8] = [
    "Use consistent spacing throughout your design (an 8px grid works great!)",
    "Limit your color palette to 2-3 main colors plus neutrals",
    "Always provide feedback for user actions (loading states, success messages)",
    "Make clickable elements at least 44px tall for usability",
    "Use micro-animations to guide user attention and provide delight",
    "Implement proper contrast ratios for accessibility",
    "Group related elements together using proximity and white space",
    "Test your design with real users, not just designers!",
];

/// Word pool for the word-guess game. All uppercase ASCII.
pub const GUESS_WORDS: [&str; 12] = [
    "DESIGN", "LAYOUT", "COLORS", "BUTTON", "NAVBAR", "FOOTER", "MOBILE", "DESKTOP", "ICONS",
    "FONTS", "SPACING", "BORDER",
];

/// Glyph pool for the memory-match game; each appears in exactly one pair.
pub const MEMORY_GLYPHS: [&str; 8] = ["🎨", "💻", "📱", "🖱", "⌨", "🖥", "📐", "🎯"];

/// A quiz question on the team screen.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
}

pub const QUIZ: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "What makes a UI truly great?",
        options: &[
            "Pretty colors",
            "User-centered design",
            "Lots of animations",
            "Complex layouts",
        ],
        correct: 1,
    },
    QuizQuestion {
        question: "Why is accessibility important in UI?",
        options: &[
            "It's required by law",
            "It makes apps usable for everyone",
            "It's trendy",
            "It's easy to implement",
        ],
        correct: 1,
    },
    QuizQuestion {
        question: "What's the key to good micro-interactions?",
        options: &[
            "They should be flashy",
            "They should provide feedback",
            "They should be complex",
            "They should be loud",
        ],
        correct: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_answers_point_at_real_options() {
        for question in QUIZ {
            assert!(question.correct < question.options.len());
        }
    }

    #[test]
    fn guess_words_are_uppercase_ascii() {
        for word in GUESS_WORDS {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn memory_glyphs_are_unique() {
        for (i, a) in MEMORY_GLYPHS.iter().enumerate() {
            for b in &MEMORY_GLYPHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
