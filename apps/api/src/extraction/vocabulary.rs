//! Static reference tables for vocabulary matching.

/// Known technology names matched inside a skills section, in priority order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "PHP",
    "Swift",
    "Kotlin",
    "React",
    "Vue",
    "Angular",
    "Next.js",
    "Nuxt",
    "Svelte",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "FastAPI",
    "HTML",
    "CSS",
    "Tailwind",
    "Bootstrap",
    "SASS",
    "SCSS",
    "Material-UI",
    "Chakra UI",
    "ShadCN",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Firebase",
    "Supabase",
    "DynamoDB",
    "Cassandra",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "GitLab",
    "Vercel",
    "Netlify",
    "REST",
    "GraphQL",
    "API",
    "Microservices",
    "CI/CD",
    "Jenkins",
    "GitHub Actions",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "AI",
    "Data Science",
    "Pandas",
    "NumPy",
    "Redux",
    "MobX",
    "Zustand",
    "React Query",
    "SWR",
    "Fiber",
    "Colly",
    "Drogon",
    "Jest",
    "Mocha",
    "Cypress",
    "Playwright",
    "Testing Library",
    "Supertest",
    "Webpack",
    "Vite",
    "Rollup",
    "Babel",
    "ESLint",
    "Prettier",
    "Swagger",
    "JWT",
    "NoSQL",
    "SQL",
    "Vectara",
    "OpenAI",
    "OpenRouter",
    "Hugging Face",
    "Llama",
    "Gemma",
    "RAG",
    "Matplotlib",
    "Seaborn",
    "Plotly",
    "CLI Development",
    "Bubble Tea",
];

/// Whole-document fallback when the skills section is missing or sparse.
pub const FALLBACK_TECH_KEYWORDS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "JavaScript",
    "TypeScript",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Go",
];

/// Matched against a project's description when its title line named no
/// technologies.
pub const PROJECT_TECH_VOCABULARY: &[&str] = &[
    "React",
    "Node",
    "Python",
    "Java",
    "TypeScript",
    "JavaScript",
    "Go",
    "C++",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Next.js",
    "Redis",
    "Express",
    "Fiber",
    "Colly",
    "Bubble Tea",
    "OpenAI",
    "GraphQL",
    "JWT",
    "Gemma",
    "Vectara",
    "RAG",
    "Llama",
    "NoSQL",
    "Swagger",
    "Drogon",
];
