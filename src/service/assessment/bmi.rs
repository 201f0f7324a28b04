//! Body Mass Index calculation and classification

use crate::model::risk::BmiCategory;

/// Compute BMI from weight in kilograms and height in centimeters,
/// rounded to one decimal place.
///
/// Callers must validate that both inputs are strictly positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

/// Classify a BMI value. Intervals are half-open with the lower
/// bound inclusive: [18.5, 25) is "Normal weight", [25, 30) is
/// "Overweight", 30 and above is "Obesity".
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_is_rounded_to_one_decimal() {
        // 70 / 1.75^2 = 22.857... -> 22.9
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(80.0, 180.0), 24.7);
        assert_eq!(calculate_bmi(100.0, 200.0), 25.0);
    }

    #[test]
    fn category_boundaries_are_exact() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.99), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obesity);
    }
}
