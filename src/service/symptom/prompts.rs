//! Prompt construction for symptom analysis

use crate::model::symptoms::SymptomRequest;

pub const SYMPTOM_SYSTEM_PROMPT: &str = "You are a helpful medical assistant. Analyze the symptoms provided and suggest possible conditions, recommendations, and whether medical attention should be sought. Format your response as JSON with keys 'possible_conditions' (array of objects with 'condition' and 'probability' fields), 'recommendations' (array of strings), 'severity_level' (string), and 'seek_medical_attention' (boolean).";

/// Build the patient prompt from the (already sanitized) request
pub fn build_symptom_prompt(data: &SymptomRequest) -> String {
    let mut prompt = format!(
        "Patient Information:\n- Age: {}\n- Gender: {}\n- Symptoms: {}\n",
        data.age,
        data.gender,
        data.symptoms.join(", ")
    );

    if !data.medical_history.is_empty() {
        prompt.push_str(&format!(
            "- Medical History: {}\n",
            data.medical_history.join(", ")
        ));
    }
    if !data.allergies.is_empty() {
        prompt.push_str(&format!("- Allergies: {}\n", data.allergies.join(", ")));
    }
    if !data.medications.is_empty() {
        prompt.push_str(&format!(
            "- Current Medications: {}\n",
            data.medications.join(", ")
        ));
    }

    prompt.push_str(
        "\nBased on this information, provide:\n\
         1. Possible conditions or diagnoses with probability estimates\n\
         2. General recommendations for the patient\n\
         3. Severity level (Low, Medium, High)\n\
         4. Whether the patient should seek immediate medical attention\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_appear_only_when_populated() {
        let mut data = SymptomRequest {
            age: 40,
            gender: "female".to_string(),
            symptoms: vec!["headache".to_string(), "fever".to_string()],
            medical_history: vec![],
            allergies: vec![],
            medications: vec![],
        };

        let prompt = build_symptom_prompt(&data);
        assert!(prompt.contains("- Age: 40"));
        assert!(prompt.contains("- Symptoms: headache, fever"));
        assert!(!prompt.contains("Medical History"));
        assert!(!prompt.contains("Allergies"));

        data.medical_history.push("asthma".to_string());
        data.medications.push("ibuprofen".to_string());
        let prompt = build_symptom_prompt(&data);
        assert!(prompt.contains("- Medical History: asthma"));
        assert!(prompt.contains("- Current Medications: ibuprofen"));
    }
}
