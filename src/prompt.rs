// src/prompt.rs
// Prompt templates, one per health use case

/// Vital signs submitted through the insights form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vitals {
    pub heart_rate: String,
    pub blood_pressure: String,
    pub glucose: String,
}

impl Vitals {
    /// Render as the labeled block embedded in the insights prompt
    pub fn summary(&self) -> String {
        format!(
            "Heart Rate: {}\nBlood Pressure: {}\nBlood Glucose: {}",
            self.heart_rate, self.blood_pressure, self.glucose
        )
    }
}

/// Most likely disease for a list of symptoms, with three supporting points
pub fn diagnosis(symptoms: &str) -> String {
    format!(
        "You are a concise and reliable medical assistant.\n\
         Based on the symptoms provided, identify the most likely disease.\n\
         Symptoms: {symptoms}\n\n\
         Respond ONLY in this format:\n\
         - Disease: <name>\n\
         - <Explanation 1>\n\
         - <Explanation 2>\n\
         - <Explanation 3>\n\
         Each point on a new line. Do not number them or include extra text."
    )
}

pub fn remedies(condition: &str) -> String {
    format!("Disease or Symptoms: {condition}\nGive a list of 6 natural remedies, one per line.")
}

/// Free-form health question
pub fn chat(question: &str) -> String {
    format!(
        "You are a smart and helpful health assistant. \
         Provide a clear, concise answer to the following question. \
         Do not include greetings or 'User:'/'Assistant:' labels.\n\n\
         {question}"
    )
}

pub fn treatment(condition: &str) -> String {
    format!(
        "Generate a concise treatment plan for the following condition:\n{condition}\n\n\
         Provide exactly one bullet point for each of the following sections:\n\
         **Medications:**\n- \n\
         **Lifestyle changes:**\n- \n\
         **Follow-up care:**\n- \n\
         Output as plain text, no extra explanation."
    )
}

/// Insights and recommendations for a week of vitals
pub fn insights(vitals: &Vitals) -> String {
    format!(
        "Analyze the following 7-day health data:\n{}\n\n\
         Provide exactly:\n\
         - 2 potential health insights\n\
         - 3 improvement recommendations\n\
         Format as:\n\
         **Potential health insights:**\n- one per line\n\
         **Improvement recommendations:**\n- one per line\n\
         No paragraphs, no commas, plain text only.",
        vitals.summary()
    )
}

pub fn daily_tips() -> String {
    "Give exactly 12 short daily health tips, one per line. \
     Start with 'Try to eat a fruit for breakfast' and end with 'Drink juices'. \
     No numbering, no extra explanation."
        .to_string()
}

/// Two safe exercises for a condition, one attribute per line
pub fn exercise(condition: &str) -> String {
    format!(
        "You are a certified health and fitness assistant. \
         For the condition or symptoms: '{condition}', list exactly 2 safe exercises. \
         Each exercise should include only these attributes: \
         Exercise Name, Type, Duration, How to do it, Intensity. \
         Do NOT include any headings, titles, extra text, bullet points, emojis, instructions, or any formatting guidelines. \
         Output only the exercises in plain text, one exercise after another, each attribute on its own line."
    )
}
