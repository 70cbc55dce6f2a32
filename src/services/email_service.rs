use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::itinerary::{ActivityCategory, Itinerary};

#[derive(Debug)]
pub enum EmailError {
    EnvironmentError(String),
    InvalidAddress(lettre::address::AddressError),
    MessageError(lettre::error::Error),
    SmtpError(lettre::transport::smtp::Error),
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            EmailError::InvalidAddress(err) => write!(f, "Invalid email address: {}", err),
            EmailError::MessageError(err) => write!(f, "Failed to build email: {}", err),
            EmailError::SmtpError(err) => write!(f, "SMTP error: {}", err),
        }
    }
}

impl Error for EmailError {}

impl From<lettre::address::AddressError> for EmailError {
    fn from(err: lettre::address::AddressError) -> Self {
        EmailError::InvalidAddress(err)
    }
}

impl From<lettre::error::Error> for EmailError {
    fn from(err: lettre::error::Error) -> Self {
        EmailError::MessageError(err)
    }
}

impl From<lettre::transport::smtp::Error> for EmailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        EmailError::SmtpError(err)
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub username: String,
    pub password: String,
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, EmailError> {
        let username = env::var("EMAIL_USER")
            .map_err(|_| EmailError::EnvironmentError("EMAIL_USER not set".to_string()))?;
        let password = env::var("EMAIL_PASS")
            .map_err(|_| EmailError::EnvironmentError("EMAIL_PASS not set".to_string()))?;
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        Ok(Self {
            smtp_host,
            username,
            password,
        })
    }
}

/// Sends an assembled itinerary as an HTML email over SMTP.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let credentials = Credentials::new(config.username.clone(), config.password);
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.username,
        })
    }

    pub async fn send_itinerary(
        &self,
        to: &str,
        itinerary: &Itinerary,
        subject: &str,
    ) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(format_itinerary_html(itinerary))?;

        self.mailer.send(message).await?;
        Ok(())
    }
}

fn category_color(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Sightseeing => "#3B82F6",
        ActivityCategory::Food => "#EF4444",
        ActivityCategory::Adventure => "#10B981",
        ActivityCategory::Culture => "#8B5CF6",
        ActivityCategory::Shopping => "#F59E0B",
        ActivityCategory::Relaxation => "#06B6D4",
    }
}

/// Render the itinerary as the HTML email body: a header, the interest tags,
/// then one card per day with its activities.
pub fn format_itinerary_html(itinerary: &Itinerary) -> String {
    let mut html = String::new();

    html.push_str(
        "<html><head><style>\
         body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\
         .header { background: #667eea; color: white; padding: 20px; text-align: center; }\
         .container { max-width: 600px; margin: 0 auto; padding: 20px; }\
         .day-card { border: 1px solid #e5e7eb; border-radius: 8px; margin: 15px 0; }\
         .day-header { background: #f9fafb; padding: 15px; border-bottom: 1px solid #e5e7eb; }\
         .activity-item { padding: 15px; border-bottom: 1px solid #f3f4f6; }\
         .activity-time { color: #6b7280; font-size: 14px; }\
         .activity-title { font-weight: bold; }\
         .activity-location { color: #6b7280; font-size: 14px; }\
         .activity-type { display: inline-block; padding: 2px 8px; border-radius: 12px; font-size: 12px; color: white; margin-left: 10px; }\
         .interest-tag { display: inline-block; background: #e5e7eb; padding: 5px 10px; border-radius: 15px; margin: 2px; font-size: 14px; }\
         </style></head><body>",
    );

    html.push_str(&format!(
        "<div class=\"header\"><h1>Your Travel Itinerary</h1><p>{} &bull; {}</p></div>",
        itinerary.destination, itinerary.duration
    ));
    html.push_str("<div class=\"container\">");

    if !itinerary.interests.is_empty() {
        html.push_str("<div><h3>Your Interests:</h3><div>");
        for interest in &itinerary.interests {
            html.push_str(&format!("<span class=\"interest-tag\">{}</span>", interest));
        }
        html.push_str("</div></div>");
    }

    for day in &itinerary.itinerary {
        html.push_str(&format!(
            "<div class=\"day-card\"><div class=\"day-header\"><h3>Day {} - {}</h3></div>",
            day.day, day.date
        ));

        for activity in &day.activities {
            html.push_str(&format!(
                "<div class=\"activity-item\">\
                 <div class=\"activity-time\">{}</div>\
                 <div class=\"activity-title\">{}\
                 <span class=\"activity-type\" style=\"background-color: {}\">{}</span></div>\
                 <div class=\"activity-location\">{}</div></div>",
                activity.time,
                activity.activity,
                category_color(activity.category),
                activity.category.as_str(),
                activity.location,
            ));
        }

        html.push_str("</div>");
    }

    html.push_str("</div></body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::{ActivityInstance, DayPlan};

    #[test]
    fn html_contains_days_activities_and_interests() {
        let itinerary = Itinerary {
            destination: "Lisbon".to_string(),
            duration: "1 days".to_string(),
            interests: vec!["Food".to_string(), "Nightlife".to_string()],
            itinerary: vec![DayPlan {
                day: 1,
                date: "2025-06-01".to_string(),
                activities: vec![ActivityInstance {
                    time: "08:00 PM".to_string(),
                    activity: "Day 1: Nightlife experience".to_string(),
                    location: "Lisbon Entertainment District".to_string(),
                    category: ActivityCategory::Culture,
                }],
            }],
        };

        let html = format_itinerary_html(&itinerary);
        assert!(html.contains("Day 1 - 2025-06-01"));
        assert!(html.contains("Day 1: Nightlife experience"));
        assert!(html.contains("Lisbon Entertainment District"));
        assert!(html.contains("interest-tag\">Nightlife"));
        assert!(html.contains("#8B5CF6"));
    }
}
