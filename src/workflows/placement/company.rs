use super::domain::{CompanyIntel, CompanyRecord, SizeCategory};

/// Fallback industry applied when a company cannot be classified.
const UNKNOWN_INDUSTRY: &str = "Technology Services";

/// One directory row. Keys are stored lowercase.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryEntry {
    pub key: &'static str,
    pub industry: &'static str,
    pub size: SizeCategory,
}

/// Immutable, ordered company directory injected into classification.
///
/// Lookup contract: an exact key match always wins. Otherwise the directory
/// is scanned in order and the first entry where the input contains the key,
/// or the key contains the input, is returned. Directory order is therefore
/// the tie-break when several keys could partially match; entries earlier in
/// the table shadow later ones.
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    entries: Vec<DirectoryEntry>,
}

impl CompanyDirectory {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    /// The built-in directory of commonly targeted employers.
    pub fn standard() -> Self {
        Self::new(standard_entries())
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Resolve a free-text company name to directory metadata.
    ///
    /// Input is trimmed and lowercased first; empty input never matches.
    /// Absence of a match is a normal outcome, not an error.
    pub fn classify(&self, name: &str) -> Option<CompanyRecord> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(entry) = self.entries.iter().find(|entry| entry.key == needle) {
            return Some(entry.record());
        }

        self.entries
            .iter()
            .find(|entry| needle.contains(entry.key) || entry.key.contains(needle.as_str()))
            .map(DirectoryEntry::record)
    }

    /// Total classification: unknown companies degrade to a Startup-tier
    /// default instead of failing.
    pub fn intel(&self, name: &str) -> CompanyIntel {
        let resolved = self.classify(name);
        let is_known = resolved.is_some();
        let record = resolved.unwrap_or(CompanyRecord {
            industry: UNKNOWN_INDUSTRY.to_string(),
            size_category: SizeCategory::Startup,
        });

        CompanyIntel {
            company_name: name.trim().to_string(),
            industry: record.industry,
            size_range: record.size_category.size_range().to_string(),
            hiring_focus: record.size_category.hiring_focus().to_string(),
            size_category: record.size_category,
            is_known,
        }
    }
}

impl DirectoryEntry {
    fn record(&self) -> CompanyRecord {
        CompanyRecord {
            industry: self.industry.to_string(),
            size_category: self.size,
        }
    }
}

fn standard_entries() -> Vec<DirectoryEntry> {
    use SizeCategory::{Enterprise, MidSize};

    fn entry(key: &'static str, industry: &'static str, size: SizeCategory) -> DirectoryEntry {
        DirectoryEntry {
            key,
            industry,
            size,
        }
    }

    vec![
        // Big Tech
        entry("amazon", "E-Commerce / Cloud", Enterprise),
        entry("google", "Big Tech", Enterprise),
        entry("microsoft", "Big Tech", Enterprise),
        entry("apple", "Big Tech / Consumer", Enterprise),
        entry("meta", "Social Media / AI", Enterprise),
        entry("facebook", "Social Media / AI", Enterprise),
        entry("netflix", "Streaming Tech", Enterprise),
        entry("uber", "Ride-Tech", Enterprise),
        entry("airbnb", "Travel Tech", Enterprise),
        entry("linkedin", "Professional Network", Enterprise),
        entry("twitter", "Social Media", Enterprise),
        entry("adobe", "Creative Software", Enterprise),
        entry("salesforce", "CRM / SaaS", Enterprise),
        entry("oracle", "Enterprise Software", Enterprise),
        entry("ibm", "IT Services / AI", Enterprise),
        entry("intel", "Semiconductors", Enterprise),
        entry("qualcomm", "Semiconductors", Enterprise),
        entry("cisco", "Networking", Enterprise),
        entry("samsung", "Consumer Electronics", Enterprise),
        // Indian IT / services
        entry("tcs", "IT Services", Enterprise),
        entry("infosys", "IT Services", Enterprise),
        entry("wipro", "IT Services", Enterprise),
        entry("hcl", "IT Services", Enterprise),
        entry("cognizant", "IT Services", Enterprise),
        entry("accenture", "Consulting / IT", Enterprise),
        entry("capgemini", "IT Services", Enterprise),
        entry("deloitte", "Consulting", Enterprise),
        entry("mphasis", "IT Services", MidSize),
        entry("hexaware", "IT Services", MidSize),
        entry("persistent", "Software Services", MidSize),
        entry("zensar", "IT Services", MidSize),
        entry("mindtree", "IT Services", MidSize),
        // Consumer / fintech
        entry("flipkart", "E-Commerce", Enterprise),
        entry("swiggy", "Food-Tech", Enterprise),
        entry("zomato", "Food-Tech", Enterprise),
        entry("ola", "Ride-Tech", Enterprise),
        entry("paytm", "Fintech", Enterprise),
        entry("phonepe", "Fintech", Enterprise),
        entry("razorpay", "Fintech", Enterprise),
        entry("cred", "Fintech", Enterprise),
        entry("meesho", "Social Commerce", Enterprise),
        entry("nykaa", "E-Commerce", Enterprise),
        entry("dream11", "Gaming / Sports", Enterprise),
        entry("zepto", "Quick Commerce", MidSize),
        // EdTech
        entry("byju's", "EdTech", Enterprise),
        entry("byjus", "EdTech", Enterprise),
        entry("unacademy", "EdTech", Enterprise),
        entry("upgrad", "EdTech", MidSize),
        // Finance
        entry("goldman sachs", "Investment Banking", Enterprise),
        entry("jp morgan", "Investment Banking", Enterprise),
        entry("jpmorgan", "Investment Banking", Enterprise),
        entry("morgan stanley", "Investment Banking", Enterprise),
        entry("hdfc", "Banking", Enterprise),
        entry("icici", "Banking", Enterprise),
        entry("bank of america", "Banking", Enterprise),
        // Mid-size product / SaaS
        entry("zoho", "SaaS / Productivity", MidSize),
        entry("freshworks", "CRM SaaS", MidSize),
        entry("postman", "API Dev Tools", MidSize),
        entry("browserstack", "Dev Tools", MidSize),
        entry("chargebee", "Billing SaaS", MidSize),
        entry("druva", "Cloud Data Protection", MidSize),
    ]
}
