//! Static marketing content served to the frontend: the about page
//! (intro, team, social links, testimonials) and the description of
//! the third-party feedback form.

use serde::{Deserialize, Serialize};

/// Third-party endpoint the feedback form posts to. The core has no
/// contract with it beyond emitting a standard HTML form.
pub const FEEDBACK_FORM_ENDPOINT: &str = "https://submit-form.com/W8y04J5LF";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub user: String,
    pub review: String,
}

/// Everything the about page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub intro: String,
    pub team: Vec<TeamMember>,
    pub social: Vec<SocialLink>,
    pub testimonials: Vec<Testimonial>,
}

/// Form descriptor handed to the frontend so the feedback page can be
/// rendered as a plain HTML form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub action: String,
    pub method: String,
    pub fields: Vec<String>,
}

/// Fixed about-page content.
#[must_use]
pub fn about_content() -> AboutContent {
    AboutContent {
        intro: "At JAD AI, we're passionate about making travel planning easy and enjoyable \
                for everyone. Our team of experienced professionals is dedicated to providing \
                innovative solutions that help travelers explore the world with confidence."
            .to_string(),
        team: vec![
            TeamMember {
                name: "Aryan Patel".to_string(),
                role: "User Interface".to_string(),
                bio: "Aryan is a creative designer who focuses on delivering intuitive user experiences.".to_string(),
            },
            TeamMember {
                name: "Dhairya Patel".to_string(),
                role: "API Research".to_string(),
                bio: "Dhairya is a tech enthusiast with expertise in API research and integration.".to_string(),
            },
            TeamMember {
                name: "Jay Vaishnav".to_string(),
                role: "Documentation".to_string(),
                bio: "Jay is a detail-oriented writer who specializes in technical documentation and content creation.".to_string(),
            },
        ],
        social: vec![
            SocialLink {
                platform: "Instagram".to_string(),
                handle: "@jadai.travel".to_string(),
            },
            SocialLink {
                platform: "Gmail".to_string(),
                handle: "jadai.travel@gmail.com".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                user: "Sarah Patel".to_string(),
                review: "I absolutely love using JAD AI for all my travel planning needs! The platform is intuitive, and it helps me discover hidden gems in every destination. Highly recommended. Thanks to JAD Ai!".to_string(),
            },
            Testimonial {
                user: "Aditya Kumar".to_string(),
                review: "JAD AI has revolutionized the way I plan my trips. The personalized itineraries and insightful recommendations make every journey memorable. Thanks to the team for their exceptional service!".to_string(),
            },
            Testimonial {
                user: "Yogendra".to_string(),
                review: "As a frequent traveler, I rely on JAD AI to streamline my itinerary planning process. The platform's user-friendly interface and AI-powered suggestions have saved me countless hours of research!".to_string(),
            },
        ],
    }
}

/// Descriptor of the third-party feedback form.
#[must_use]
pub fn feedback_form() -> FeedbackForm {
    FeedbackForm {
        action: FEEDBACK_FORM_ENDPOINT.to_string(),
        method: "POST".to_string(),
        fields: vec![
            "name".to_string(),
            "email".to_string(),
            "message".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_content_is_populated() {
        let content = about_content();
        assert!(!content.intro.is_empty());
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.social.len(), 2);
        assert_eq!(content.testimonials.len(), 3);
    }

    #[test]
    fn test_feedback_form_targets_external_endpoint() {
        let form = feedback_form();
        assert_eq!(form.action, FEEDBACK_FORM_ENDPOINT);
        assert_eq!(form.fields, vec!["name", "email", "message"]);
    }
}
