//! スキームカタログ
//!
//! 障害者福祉スキームの静的マスタ。申請フローからは
//! `resolve` で表示名と金額だけを引く。

use serde::Serialize;

/// カタログに無いスキームIDで申請されたときの表示名
pub const UNKNOWN_SCHEME_NAME: &str = "Unknown Scheme";

/// 金額情報が無いときの表記
pub const AMOUNT_NOT_AVAILABLE: &str = "N/A";

/// スキーム分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchemeCategory {
    Educational,
    EmploymentSkills,
    AssistiveDevices,
    SocialSecurity,
    MshfdcLoans,
    SportsRecreation,
}

impl SchemeCategory {
    pub const ALL: [SchemeCategory; 6] = [
        SchemeCategory::Educational,
        SchemeCategory::EmploymentSkills,
        SchemeCategory::AssistiveDevices,
        SchemeCategory::SocialSecurity,
        SchemeCategory::MshfdcLoans,
        SchemeCategory::SportsRecreation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SchemeCategory::Educational => "Educational Schemes",
            SchemeCategory::EmploymentSkills => "Employment & Skill Development",
            SchemeCategory::AssistiveDevices => "Assistive Devices & Aids",
            SchemeCategory::SocialSecurity => "Social Security",
            SchemeCategory::MshfdcLoans => "MSHFDC Loans",
            SchemeCategory::SportsRecreation => "Sports & Recreation",
        }
    }
}

/// スキーム定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scheme {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SchemeCategory,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static [&'static str],
    pub documents: &'static [&'static str],
    pub amount: Option<&'static str>,
}

/// 申請レコードに転記するスキーム情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScheme {
    pub name: String,
    pub amount: String,
}

/// 全スキームを定義順で返す
pub fn all() -> &'static [Scheme] {
    SCHEMES
}

/// IDでスキームを検索
pub fn lookup(scheme_id: &str) -> Option<&'static Scheme> {
    SCHEMES.iter().find(|s| s.id == scheme_id)
}

/// 分類ごとのスキーム一覧
pub fn by_category(category: SchemeCategory) -> impl Iterator<Item = &'static Scheme> {
    SCHEMES.iter().filter(move |s| s.category == category)
}

/// 表示名と金額を解決する
///
/// 未知のIDでも失敗させず、`"Unknown Scheme"` / `"N/A"` で埋める。
pub fn resolve(scheme_id: &str) -> ResolvedScheme {
    match lookup(scheme_id) {
        Some(scheme) => ResolvedScheme {
            name: scheme.name.to_string(),
            amount: scheme.amount.unwrap_or(AMOUNT_NOT_AVAILABLE).to_string(),
        },
        None => ResolvedScheme {
            name: UNKNOWN_SCHEME_NAME.to_string(),
            amount: AMOUNT_NOT_AVAILABLE.to_string(),
        },
    }
}

static SCHEMES: &[Scheme] = &[
    Scheme {
        id: "pre-matric",
        name: "Pre-Matric Scholarship",
        category: SchemeCategory::Educational,
        description: "Financial assistance for students with disabilities studying in classes 1-10. This scheme aims to support early education and reduce the financial burden on families.",
        eligibility: "Students studying in Class 1-10 with 40% or more disability",
        benefits: &[
            "Tuition fee reimbursement",
            "Maintenance allowance",
            "Book allowance",
            "Additional allowance for disabled students",
        ],
        documents: &[
            "Disability Certificate (40% or above)",
            "Income Certificate",
            "Aadhaar Card",
            "School/College Admission Proof",
            "Bank Account Details",
            "Passport Size Photographs",
        ],
        amount: Some("Up to ₹25,000 per annum"),
    },
    Scheme {
        id: "post-matric",
        name: "Post-Matric Scholarship",
        category: SchemeCategory::Educational,
        description: "Scholarship for students with disabilities pursuing education from Class 11 onwards, including graduation and post-graduation courses.",
        eligibility: "Students studying in Class 11 & Above with 40% or more disability",
        benefits: &[
            "Full tuition fee coverage",
            "Maintenance allowance",
            "Book and equipment allowance",
            "Reader allowance for visually impaired",
        ],
        documents: &[
            "Disability Certificate (40% or above)",
            "Income Certificate",
            "Aadhaar Card",
            "Educational Certificates",
            "Admission Proof",
            "Bank Account Details",
        ],
        amount: Some("Up to ₹50,000 per annum"),
    },
    Scheme {
        id: "fellowship",
        name: "National Fellowship",
        category: SchemeCategory::Educational,
        description: "Fellowship program for M.Phil and Ph.D students with disabilities to pursue higher education and research.",
        eligibility: "M.Phil & Ph.D Students with 40% or more disability",
        benefits: &[
            "Monthly fellowship stipend",
            "Contingency grant",
            "Escort/Reader allowance",
            "Departmental assistance",
        ],
        documents: &[
            "Disability Certificate",
            "M.Phil/Ph.D Admission Proof",
            "Research Proposal",
            "Income Certificate",
            "Aadhaar Card",
        ],
        amount: Some("Up to ₹1,00,000 per annum"),
    },
    Scheme {
        id: "self-employment",
        name: "Self-Employment Scheme",
        category: SchemeCategory::EmploymentSkills,
        description: "Financial assistance and support for persons with disabilities to start their own business or become self-employed.",
        eligibility: "Persons with disabilities aged 18-55 years with 40% or more disability",
        benefits: &[
            "Subsidy up to 25% of project cost",
            "Bank loan assistance",
            "Training and skill development",
            "Marketing support",
        ],
        documents: &[
            "Disability Certificate (40% or above)",
            "Aadhaar Card",
            "Income Certificate",
            "Business Plan",
            "Bank Account Details",
            "Residential Proof",
        ],
        amount: Some("Up to ₹2,50,000"),
    },
    Scheme {
        id: "skill-development",
        name: "Skill Development Training",
        category: SchemeCategory::EmploymentSkills,
        description: "Vocational training programs to enhance employability and skills of persons with disabilities.",
        eligibility: "Persons with disabilities aged 18-45 years",
        benefits: &[
            "Free training programs",
            "Stipend during training",
            "Job placement assistance",
            "Certificate upon completion",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Educational Certificates",
            "Income Certificate",
        ],
        amount: Some("Training + Stipend"),
    },
    Scheme {
        id: "skill-training",
        name: "National Action Plan for Skill Training",
        category: SchemeCategory::EmploymentSkills,
        description: "Comprehensive skill training program under the National Action Plan for persons with disabilities.",
        eligibility: "Persons with disabilities aged 15-60 years",
        benefits: &[
            "Multiple skill courses",
            "Industry-relevant training",
            "Placement support",
            "Entrepreneurship guidance",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Educational Qualification Proof",
            "Income Certificate",
        ],
        amount: Some("Free Training"),
    },
    Scheme {
        id: "assistive-devices",
        name: "ADIP Scheme",
        category: SchemeCategory::AssistiveDevices,
        description: "Assistance to Disabled persons for Purchase/Fitting of Aids and Appliances (ADIP) scheme provides assistive devices at subsidized rates.",
        eligibility: "BPL families with persons having 40% or more disability",
        benefits: &[
            "Subsidized assistive devices",
            "Free devices for BPL families",
            "Repair and maintenance support",
            "Training on device usage",
        ],
        documents: &[
            "Disability Certificate (40% or above)",
            "Aadhaar Card",
            "BPL Certificate",
            "Income Certificate",
            "Medical Prescription",
        ],
        amount: Some("Subsidized/Free"),
    },
    Scheme {
        id: "artificial-limbs",
        name: "Artificial Limbs",
        category: SchemeCategory::AssistiveDevices,
        description: "Provision of artificial limbs and prosthetics for persons with locomotor disabilities.",
        eligibility: "All categories of persons with locomotor disability",
        benefits: &[
            "Free artificial limbs",
            "Fitting and adjustment",
            "Repair and replacement",
            "Follow-up services",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Medical Certificate",
            "Prescription from Doctor",
        ],
        amount: Some("Free"),
    },
    Scheme {
        id: "hearing-aids",
        name: "Hearing Aids",
        category: SchemeCategory::AssistiveDevices,
        description: "Provision of hearing aids and related assistive devices for persons with hearing impairment.",
        eligibility: "Persons with hearing impairment (40% or above)",
        benefits: &[
            "Free hearing aids",
            "Battery supply",
            "Repair services",
            "Audiological assessment",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Audiological Report",
            "Medical Prescription",
        ],
        amount: Some("Free"),
    },
    Scheme {
        id: "disability-pension",
        name: "Disability Pension",
        category: SchemeCategory::SocialSecurity,
        description: "Monthly pension for persons with disabilities to provide financial security and support.",
        eligibility: "Persons with 40% or more disability, aged 18 years and above",
        benefits: &[
            "Monthly pension",
            "Direct bank transfer",
            "Annual increment",
            "Family coverage",
        ],
        documents: &[
            "Disability Certificate (40% or above)",
            "Aadhaar Card",
            "Income Certificate",
            "Bank Account Details",
            "Age Proof",
        ],
        amount: Some("₹500-1000 per month"),
    },
    Scheme {
        id: "maintenance-allowance",
        name: "Maintenance Allowance",
        category: SchemeCategory::SocialSecurity,
        description: "Financial assistance for severely disabled persons who require constant care and support.",
        eligibility: "Severely disabled persons (80% or above disability)",
        benefits: &[
            "Monthly maintenance allowance",
            "Caregiver support",
            "Medical expense coverage",
            "Direct benefit transfer",
        ],
        documents: &[
            "Disability Certificate (80% or above)",
            "Aadhaar Card",
            "Medical Certificate",
            "Income Certificate",
            "Bank Account Details",
        ],
        amount: Some("₹1,000-2,000 per month"),
    },
    Scheme {
        id: "igndps",
        name: "Indira Gandhi National Disability Pension",
        category: SchemeCategory::SocialSecurity,
        description: "Central government pension scheme for persons with disabilities from BPL families.",
        eligibility: "Persons with disabilities aged 18-59 years from BPL families",
        benefits: &[
            "Monthly pension",
            "Central government support",
            "Direct bank transfer",
            "Annual revision",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "BPL Certificate",
            "Age Proof",
            "Bank Account Details",
        ],
        amount: Some("₹300-500 per month"),
    },
    Scheme {
        id: "term-loan",
        name: "Term Loan for Business",
        category: SchemeCategory::MshfdcLoans,
        description: "Term loans for starting or expanding business ventures for persons with disabilities.",
        eligibility: "Persons with disabilities with viable business plans",
        benefits: &[
            "Loan up to ₹10 Lakhs",
            "Subsidized interest rates",
            "Flexible repayment",
            "Business counseling",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Business Plan",
            "Income Certificate",
            "Bank Statements",
            "Property Documents (if applicable)",
        ],
        amount: Some("Up to ₹10 Lakhs"),
    },
    Scheme {
        id: "education-loan",
        name: "Education Loan",
        category: SchemeCategory::MshfdcLoans,
        description: "Educational loans for higher education and professional courses for students with disabilities.",
        eligibility: "Students with disabilities pursuing higher education",
        benefits: &[
            "Loan for tuition and expenses",
            "Low interest rates",
            "Moratorium period",
            "Tax benefits",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Admission Proof",
            "Income Certificate",
            "Co-applicant Details",
        ],
        amount: Some("Up to ₹20 Lakhs"),
    },
    Scheme {
        id: "micro-credit",
        name: "Micro Credit Finance",
        category: SchemeCategory::MshfdcLoans,
        description: "Small loans for micro-enterprises and self-employment activities for persons with disabilities.",
        eligibility: "Persons with disabilities for micro-enterprises",
        benefits: &[
            "Quick loan processing",
            "Minimal documentation",
            "Flexible repayment",
            "No collateral required",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Income Certificate",
            "Business Proposal",
        ],
        amount: Some("Up to ₹50,000"),
    },
    Scheme {
        id: "sports-equipment",
        name: "Sports Equipment Grant",
        category: SchemeCategory::SportsRecreation,
        description: "Financial assistance for purchasing sports equipment for disabled sportspersons.",
        eligibility: "Sportspersons with disabilities",
        benefits: &[
            "Equipment purchase grant",
            "Training support",
            "Competition participation",
            "Coaching assistance",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Sports Achievement Certificates",
            "Equipment Quotation",
        ],
        amount: Some("Up to ₹50,000"),
    },
    Scheme {
        id: "sports-coaching",
        name: "Coaching Assistance",
        category: SchemeCategory::SportsRecreation,
        description: "Financial support for coaching and training of disabled sportspersons at national and state levels.",
        eligibility: "National/State level disabled sportspersons",
        benefits: &[
            "Coaching fee support",
            "Training camp expenses",
            "Travel allowance",
            "Nutrition support",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Sports Certificates",
            "Coaching Center Details",
        ],
        amount: Some("Up to ₹1,00,000"),
    },
    Scheme {
        id: "sports-prize",
        name: "Prize Money for Achievements",
        category: SchemeCategory::SportsRecreation,
        description: "Cash prizes and rewards for disabled sportspersons achieving excellence in competitions.",
        eligibility: "Winners in national/international competitions",
        benefits: &[
            "Cash prizes",
            "Recognition awards",
            "Medal rewards",
            "Career support",
        ],
        documents: &[
            "Disability Certificate",
            "Aadhaar Card",
            "Achievement Certificates",
            "Competition Results",
        ],
        amount: Some("As per achievement level"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), all().len());
        assert_eq!(all().len(), 18);
    }

    #[test]
    fn test_every_category_has_schemes() {
        for category in SchemeCategory::ALL {
            assert!(by_category(category).count() > 0, "{:?} が空", category);
        }
    }

    #[test]
    fn test_lookup_known_scheme() {
        let scheme = lookup("disability-pension").expect("スキームが見つからない");
        assert_eq!(scheme.name, "Disability Pension");
        assert_eq!(scheme.category, SchemeCategory::SocialSecurity);
        assert_eq!(scheme.category.label(), "Social Security");
    }

    #[test]
    fn test_resolve_known_scheme() {
        let resolved = resolve("pre-matric");
        assert_eq!(resolved.name, "Pre-Matric Scholarship");
        assert_eq!(resolved.amount, "Up to ₹25,000 per annum");
    }

    #[test]
    fn test_resolve_unknown_scheme_falls_back() {
        let resolved = resolve("not-a-real-scheme");
        assert_eq!(resolved.name, "Unknown Scheme");
        assert_eq!(resolved.amount, "N/A");
        assert!(lookup("not-a-real-scheme").is_none());
    }
}
