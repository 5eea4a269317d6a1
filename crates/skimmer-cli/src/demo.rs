//! Built-in sample documents for the `--demo` walkthrough.

/// Sample documents exercising each outcome: complete, partial, and empty.
pub const DEMO_DOCUMENTS: &[(&str, &str)] = &[
    (
        "Complete proposal",
        "Project Proposal: Website Redesign\n\n\
         Company: TechCorp Solutions Inc.\n\
         Budget: $75,000 USD\n\
         Deadline: March 15, 2025\n\n\
         We are seeking to redesign our corporate website to improve user \
         experience and increase conversion rates.",
    ),
    (
        "Partial request",
        "Marketing Campaign Request\n\n\
         Company: GreenEarth Marketing\n\
         Budget: $25,000\n\n\
         We need a comprehensive marketing campaign for our new eco-friendly \
         product line. Please provide a detailed proposal.",
    ),
    (
        "One-line brief",
        "Acme needs a campaign with a budget of 10000 and a deadline of 2025-09-01.",
    ),
    (
        "General inquiry",
        "Hello, I'm interested in learning more about your services. Could you \
         please send me some information about your pricing?",
    ),
];
