// static page content
//
// this is the copy rendered by the pages.  icons are a tagged variant rather than component
// references, and the webapp resolves them through a lookup table

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Icon {
    Layers,
    BrainCircuit,
    CloudCog,
    Database,
    Code,
    CheckCircle,
    Building,
    HeartPulse,
    ShoppingCart,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServiceCategory {
    DataAndAi,
    CloudAndDevOps,
    ApplicationDevelopment,
}

impl ServiceCategory {
    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::DataAndAi => "Data & AI",
            ServiceCategory::CloudAndDevOps => "Cloud & DevOps",
            ServiceCategory::ApplicationDevelopment => "Application Development",
        }
    }
}

// pillars and differentiators share the same shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolutionCategory {
    ByIndustry,
    ByUseCase,
}

impl SolutionCategory {
    pub fn label(self) -> &'static str {
        match self {
            SolutionCategory::ByIndustry => "By Industry",
            SolutionCategory::ByUseCase => "By Use Case",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    pub category: SolutionCategory,
    pub icon: Option<Icon>,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceKind {
    Blog,
    Whitepaper,
    Webinar,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Blog => "Blog",
            ResourceKind::Whitepaper => "Whitepaper",
            ResourceKind::Webinar => "Webinar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image_url: &'static str,
}

pub const CORE_PILLARS: &[Feature] = &[
    Feature {
        icon: Icon::Layers,
        title: "Unified Data Platforms",
        description: "We architect and build scalable data platforms that unify disparate data sources, providing a single source of truth for your entire organization.",
    },
    Feature {
        icon: Icon::BrainCircuit,
        title: "Intelligent AI Solutions",
        description: "From predictive analytics to generative AI agents, we develop intelligent systems that automate processes, uncover insights, and create new value.",
    },
    Feature {
        icon: Icon::CloudCog,
        title: "Modern Cloud Engineering",
        description: "Leveraging the best of AWS, GCP, and Azure, we deliver resilient, cost-effective, and secure cloud infrastructure tailored to your business needs.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Database,
        title: "Data Engineering",
        description: "Design and implementation of robust big data, real-time, and batch data pipelines.",
        category: ServiceCategory::DataAndAi,
    },
    Service {
        icon: Icon::BrainCircuit,
        title: "Data Science & AI",
        description: "Harnessing traditional ML, agentic AI, and GenAI to build powerful, predictive AI pipelines.",
        category: ServiceCategory::DataAndAi,
    },
    Service {
        icon: Icon::Layers,
        title: "Data Analytics",
        description: "Enabling insightful decisions with real-time and batch analytics dashboards and reporting.",
        category: ServiceCategory::DataAndAi,
    },
    Service {
        icon: Icon::CloudCog,
        title: "Cloud Infrastructure",
        description: "Expert architecture and management on AWS, GCP, and Azure for scalable and secure operations.",
        category: ServiceCategory::CloudAndDevOps,
    },
    Service {
        icon: Icon::Code,
        title: "Application Development",
        description: "Building high-performance applications with React, NodeJS, SpringBoot, and mobile technologies.",
        category: ServiceCategory::ApplicationDevelopment,
    },
    Service {
        icon: Icon::CheckCircle,
        title: "DevSecOps",
        description: "Automating and securing your software lifecycle with Jenkins, Kubernetes, and Terraform.",
        category: ServiceCategory::CloudAndDevOps,
    },
];

pub const DIFFERENTIATORS: &[Feature] = &[
    Feature {
        icon: Icon::CheckCircle,
        title: "Business-Outcome Driven",
        description: "We start with your desired business outcomes and engineer technology solutions that directly support those goals, ensuring a clear ROI.",
    },
    Feature {
        icon: Icon::BrainCircuit,
        title: "AI-Native Approach",
        description: "Our teams are fluent in the latest AI and ML technologies, embedding intelligence into every layer of the solutions we build, from infrastructure to user experience.",
    },
    Feature {
        icon: Icon::Layers,
        title: "Multi-Cloud & Hybrid Expertise",
        description: "We provide unbiased, expert guidance across AWS, GCP, Azure, and on-premise environments to build the best-fit architecture for your specific needs, avoiding vendor lock-in.",
    },
    Feature {
        icon: Icon::Code,
        title: "Full-Stack Capability",
        description: "From foundational data pipelines and cloud infrastructure to polished frontend applications, our integrated teams can own and deliver your entire technology stack.",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "Contact Us",
        description: "For teams getting started with a single, well-defined project.",
        features: &[
            "1 Project Scope",
            "Dedicated Project Manager",
            "Bi-weekly Reporting",
            "Standard Support",
        ],
        featured: false,
    },
    PricingTier {
        name: "Professional",
        price: "Contact Us",
        description: "For businesses looking for a long-term strategic technology partner.",
        features: &[
            "Multiple Concurrent Projects",
            "Dedicated Technical Architect",
            "Weekly Strategy Sessions",
            "Priority Support (24hr SLA)",
        ],
        featured: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Contact Us",
        description: "For large organizations requiring comprehensive, on-demand expertise.",
        features: &[
            "Full Team Integration",
            "On-demand Staff Augmentation",
            "Custom SLA & On-site Options",
            "Executive-level Reporting",
        ],
        featured: false,
    },
];

pub const SOLUTIONS: &[Solution] = &[
    Solution {
        category: SolutionCategory::ByIndustry,
        icon: Some(Icon::Building),
        title: "Financial Services",
        description: "Real-time fraud detection, algorithmic trading infrastructure, and regulatory compliance reporting platforms.",
    },
    Solution {
        category: SolutionCategory::ByIndustry,
        icon: Some(Icon::HeartPulse),
        title: "Healthcare",
        description: "Personalized patient outcome prediction, secure clinical data lakes, and operational efficiency analytics.",
    },
    Solution {
        category: SolutionCategory::ByIndustry,
        icon: Some(Icon::ShoppingCart),
        title: "Retail & E-commerce",
        description: "Hyper-personalized recommendation engines, supply chain optimization, and customer lifetime value modeling.",
    },
    Solution {
        category: SolutionCategory::ByUseCase,
        icon: None,
        title: "Real-time Analytics",
        description: "Building streaming data pipelines with technologies like Kafka and Flink for immediate insights.",
    },
    Solution {
        category: SolutionCategory::ByUseCase,
        icon: None,
        title: "MLOps & AI Pipelines",
        description: "End-to-end automation of machine learning model training, deployment, and monitoring for reliable AI.",
    },
    Solution {
        category: SolutionCategory::ByUseCase,
        icon: None,
        title: "Generative AI Applications",
        description: "Developing custom chatbots, content generation tools, and agentic workflows using the latest foundation models.",
    },
];

pub const RESOURCES: &[Resource] = &[
    Resource {
        kind: ResourceKind::Blog,
        title: "The Modern Data Lakehouse: A Pragmatic Guide",
        description: "Explore the architectural patterns combining the best of data lakes and data warehouses.",
        link: "/resources",
    },
    Resource {
        kind: ResourceKind::Whitepaper,
        title: "Scaling AI: From Prototype to Production",
        description: "A deep dive into the MLOps practices required to operationalize machine learning effectively.",
        link: "/resources",
    },
    Resource {
        kind: ResourceKind::Webinar,
        title: "Serverless Data Pipelines on AWS",
        description: "Watch our on-demand webinar on building cost-effective, event-driven data processing systems.",
        link: "/resources",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dr. Evelyn Reed",
        role: "Founder & CEO",
        bio: "With a PhD in Distributed Systems, Evelyn founded BintyByte to bridge the gap between cutting-edge research and practical business application.",
        image_url: "https://picsum.photos/seed/evelyn/400/400",
    },
    TeamMember {
        name: "Ben Carter",
        role: "Head of Engineering",
        bio: "A cloud-native evangelist, Ben leads our engineering teams with a focus on elegant architecture and operational excellence across all major cloud platforms.",
        image_url: "https://picsum.photos/seed/ben/400/400",
    },
    TeamMember {
        name: "Priya Singh",
        role: "Head of Data Science",
        bio: "Priya is a leader in applied AI, specializing in natural language processing and reinforcement learning to solve complex commercial challenges.",
        image_url: "https://picsum.photos/seed/priya/400/400",
    },
];

// footer "company" column
pub const COMPANY_LINKS: &[(&str, &str)] = &[
    ("About", "/about"),
    ("Why Us", "/why-us"),
    ("Resources", "/resources"),
    ("Contact", "/contact"),
];

pub fn solutions_in(category: SolutionCategory) -> impl Iterator<Item = &'static Solution> {
    SOLUTIONS.iter().filter(move |s| s.category == category)
}
