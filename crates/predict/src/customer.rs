//! The hard-coded test customer

use churn_lib::Record;

/// Single customer record scored by this tool
pub fn example_customer() -> Record {
    Record::new()
        .with("gender", "female")
        .with("seniorcitizen", 0i64)
        .with("partner", "yes")
        .with("dependents", "no")
        .with("phoneservice", "no")
        .with("multiplelines", "no_phone_service")
        .with("internetservice", "dsl")
        .with("onlinesecurity", "no")
        .with("onlinebackup", "yes")
        .with("deviceprotection", "no")
        .with("techsupport", "no")
        .with("streamingtv", "no")
        .with("streamingmovies", "no")
        .with("contract", "month-to-month")
        .with("paperlessbilling", "yes")
        .with("paymentmethod", "electronic_check")
        .with("tenure", 1i64)
        .with("monthlycharges", 29.85)
        .with("totalcharges", 29.85)
}

#[cfg(test)]
mod tests {
    use super::*;
    use churn_lib::FieldValue;

    #[test]
    fn test_customer_has_all_nineteen_fields() {
        assert_eq!(example_customer().len(), 19);
    }

    #[test]
    fn test_customer_key_attributes() {
        let customer = example_customer();
        assert_eq!(
            customer.get("contract"),
            Some(&FieldValue::Text("month-to-month".to_string()))
        );
        assert_eq!(
            customer.get("internetservice"),
            Some(&FieldValue::Text("dsl".to_string()))
        );
        assert_eq!(customer.get("tenure"), Some(&FieldValue::Number(1.0)));
        assert_eq!(
            customer.get("monthlycharges"),
            Some(&FieldValue::Number(29.85))
        );
    }
}
