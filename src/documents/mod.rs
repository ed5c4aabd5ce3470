// documents/mod.rs — Offer-letter document generation.
//
// The "PDF" is a styled HTML file written under {data_dir}/documents — the
// signature flow only needs a document that exists at a known path, and the
// REST layer serves the directory statically for previews.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tracing::info;

use crate::offers::{format_salary, JobOffer};

const COMPANY_NAME: &str = "Your Company";

pub struct DocumentGenerator {
    documents_dir: PathBuf,
}

impl DocumentGenerator {
    pub fn new(documents_dir: PathBuf) -> Self {
        Self { documents_dir }
    }

    /// Render the offer letter and write it under the documents directory.
    /// Returns the file path.
    pub async fn generate(&self, offer: &JobOffer) -> Result<String> {
        tokio::fs::create_dir_all(&self.documents_dir)
            .await
            .with_context(|| {
                format!(
                    "cannot create documents directory {}",
                    self.documents_dir.display()
                )
            })?;

        let file_name = format!(
            "offer_{}_{}.html",
            offer.id,
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = self.documents_dir.join(&file_name);
        let html = render_letter(offer);
        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("cannot write document {}", path.display()))?;

        info!(file = %file_name, offer_id = %offer.id, "offer document generated");
        Ok(path.to_string_lossy().into_owned())
    }

    /// Public URL for a generated document (served under `/documents`).
    pub fn document_url(&self, document_path: &str) -> String {
        let file_name = Path::new(document_path)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/documents/{file_name}")
    }
}

/// Substitute the letter-template placeholders the HR form uses.
fn substitute_placeholders(offer: &JobOffer) -> String {
    let deadline = (Utc::now() + Duration::days(7)).format("%B %d, %Y").to_string();
    offer
        .offer_content
        .replace("[Candidate's Name]", &offer.recipient_name)
        .replace("[Position Title]", &offer.job_title)
        .replace("[Company Name]", COMPANY_NAME)
        .replace(
            "[Start Date]",
            &offer.start_date.format("%B %d, %Y").to_string(),
        )
        .replace("[Amount]", &format!("${}", format_salary(&offer.salary)))
        .replace("[Department]", &offer.department)
        .replace("[Remote / Office / Hybrid]", "Office")
        .replace("[Deadline]", &deadline)
}

fn render_letter(offer: &JobOffer) -> String {
    let content = substitute_placeholders(offer)
        .replace('\r', "")
        .replace('\n', "<br>");
    let generated_on = Utc::now().format("%B %d, %Y");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Job Offer - {title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 40px 20px;
        }}
        .header {{
            text-align: center;
            margin-bottom: 40px;
            padding-bottom: 20px;
            border-bottom: 2px solid #4F46E5;
        }}
        .company-logo {{
            font-size: 24px;
            font-weight: bold;
            color: #4F46E5;
            margin-bottom: 10px;
        }}
        .content {{
            margin-bottom: 30px;
        }}
        .signature-section {{
            margin-top: 60px;
            padding-top: 20px;
            border-top: 1px solid #ddd;
        }}
        .signature-line {{
            border-bottom: 1px solid #333;
            width: 300px;
            margin: 20px 0 10px 0;
            height: 20px;
        }}
        .date {{
            color: #666;
            font-size: 14px;
        }}
    </style>
</head>
<body>
    <div class="header">
        <div class="company-logo">{company}</div>
        <div class="date">Generated on {generated_on}</div>
    </div>

    <div class="content">
        {content}
    </div>

    <div class="signature-section">
        <p><strong>Candidate Signature:</strong></p>
        <div class="signature-line"></div>
        <p>Date: _________________</p>

        <p style="margin-top: 40px;"><strong>Company Representative:</strong></p>
        <div class="signature-line"></div>
        <p>Date: _________________</p>
    </div>
</body>
</html>
"#,
        title = offer.job_title,
        company = COMPANY_NAME,
        generated_on = generated_on,
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn offer() -> JobOffer {
        JobOffer {
            id: "o-1".to_string(),
            recipient_name: "Dana Reyes".to_string(),
            recipient_email: "dana@example.com".to_string(),
            job_title: "Staff Engineer".to_string(),
            department: "Platform".to_string(),
            salary: Decimal::from(120_000i64),
            start_date: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
            offer_content: "Dear [Candidate's Name],\nWe offer you [Position Title] in \
                            [Department] at [Company Name] starting [Start Date] for [Amount]."
                .to_string(),
            status: Default::default(),
            document_path: None,
            envelope_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn placeholders_are_substituted() {
        let out = substitute_placeholders(&offer());
        assert!(out.contains("Dear Dana Reyes"));
        assert!(out.contains("Staff Engineer"));
        assert!(out.contains("Platform"));
        assert!(out.contains("October 01, 2026"));
        assert!(out.contains("$120,000"));
        assert!(!out.contains('['));
    }

    #[test]
    fn letter_html_wraps_content_and_signature_block() {
        let html = render_letter(&offer());
        assert!(html.contains("<title>Job Offer - Staff Engineer</title>"));
        assert!(html.contains("Dear Dana Reyes,<br>"));
        assert!(html.contains("Candidate Signature"));
    }

    #[test]
    fn document_url_uses_file_name_only() {
        let generator = DocumentGenerator::new(PathBuf::from("/tmp/offerd/documents"));
        let url = generator.document_url("/tmp/offerd/documents/offer_o-1_20260830_120000.html");
        assert_eq!(url, "/documents/offer_o-1_20260830_120000.html");
    }

    #[tokio::test]
    async fn generate_writes_file_to_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let generator = DocumentGenerator::new(dir.path().join("documents"));
        let path = generator.generate(&offer()).await.unwrap();
        assert!(!path.is_empty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Dana Reyes"));
    }
}
