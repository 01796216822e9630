use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, Visitor},
};
use std::fmt;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message";

/// The four-field payload a visitor submits through the contact form.
///
/// Only a JSON object with every field as a string deserializes; unknown
/// keys are ignored. Nothing else is checked on the server side; the
/// contents never influence the response.
#[derive(Serialize, Default, Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // deserialize_map, not deserialize_struct: sequences must not match
        deserializer.deserialize_map(SubmissionVisitor)
    }
}

struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = Submission;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with name, email, subject and message strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Submission, A::Error> {
        let mut name = None;
        let mut email = None;
        let mut subject = None;
        let mut message = None;

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "name" => &mut name,
                "email" => &mut email,
                "subject" => &mut subject,
                "message" => &mut message,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if slot.is_some() {
                return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
            }

            *slot = Some(map.next_value::<String>()?);
        }

        Ok(Submission {
            name: name.ok_or_else(|| de::Error::missing_field("name"))?,
            email: email.ok_or_else(|| de::Error::missing_field("email"))?,
            subject: subject.ok_or_else(|| de::Error::missing_field("subject"))?,
            message: message.ok_or_else(|| de::Error::missing_field("message"))?,
        })
    }
}

/// Response body of the contact endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
}

impl Envelope {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_owned(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: FAILED_MESSAGE.to_owned(),
        }
    }
}
