// Rubric templates for posting screening.
// `{yes_no}` and `{posting}` are expanded from llm_client::prompts before the
// posting fields themselves are substituted.

/// Relevance rubric: target companies/roles, 2026 internship or entry-level only.
pub const RELEVANCE_TEMPLATE: &str = r#"
Examples of target companies/roles:
Strategy Consulting: McKinsey & Company, BCG, Bain & Company, Oliver Wyman, EY-Parthenon, Strategy& (PwC), Deloitte S&A (Monitor), Accenture
Bulge Bracket Asset Mgmt: Goldman Sachs Asset Management, Morgan Stanley Investment Mgmt, J.P. Morgan Asset Management, Citi, Bank of America, UBS Asset Management, Barclays, Deutsche Bank, BNP Paribas, Credit Suisse AM
Private Equity: Blackstone, KKR, Apollo, Carlyle, Brookfield, TPG, Bain Capital, Vista, General Atlantic, Silver Lake, Hellman & Friedman, Oaktree, Ares, StepStone, Partners Group
Hedge Funds / Quant: Bridgewater, Citadel, Jane Street, Two Sigma, DE Shaw, Renaissance, Point72, Millennium, Jump, HRT
Big Tech (Strategy/Data): Google, Meta, Amazon, Microsoft, Palantir, Stripe, OpenAI, Nvidia, Tesla, Apple, Adobe, ASML, Broadcom
Venture Capital / Growth: Sequoia, a16z, Insight, General Catalyst, Accel, Lightspeed, Battery, Bessemer, Redpoint, Founders Fund, Coatue, Thrive, etc.
Misc: APM, Biz Ops, Corp Strategy, Finance, Data, Deployment Strategist, Applied AI, Risk, CSE, Growth, Quant, etc.
The search is ONLY for 2026 Internship or Full-Time Roles.
Only return "Yes" if this condition is met: The job is similar to type of companies listed above (even if not exactly named) and is an internship or entry-level full-time role for 2026.
Otherwise, return "No".

Evaluate the following job posting. {yes_no}

{posting}

Reply with "Yes" only if BOTH conditions are met as described above. Otherwise, reply "No".
"#;

/// Sponsorship rubric. Unsure answers must be "No".
pub const SPONSORSHIP_TEMPLATE: &str = r#"
Given the following job posting, does the company or role likely sponsor work visas for international candidates (such as H-1B, F-1 OPT, etc.)?
{yes_no} If unsure, respond "No".

{posting}

Reply with "Yes" if there is any indication of sponsorship or if the company is known to sponsor. Otherwise, reply "No".
"#;
