//! The canonical ColorPro backend blueprint.
//!
//! The content is descriptive: it names the stack and folder layout of the
//! ColorPro platform backend. None of the services mentioned here are
//! contacted or validated; the blueprint is data, not configuration.

use crate::Descriptor;

/// Build the full ColorPro backend blueprint.
///
/// The returned descriptor has two top-level sections, in order: the
/// architecture stack and the project folder structure.
pub fn blueprint() -> Descriptor {
    Descriptor::builder()
        .nested("ColorPro Backend Architecture", architecture())
        .nested("Project Structure", project_structure())
        .build()
}

/// The technology choices for each backend concern.
fn architecture() -> Descriptor {
    Descriptor::builder()
        .text("Framework", "Express.js with TypeScript")
        .text("Database", "MongoDB with Mongoose ODM")
        .text("Authentication", "Firebase Authentication + JWT")
        .text("File Storage", "AWS S3 / Google Cloud Storage")
        .text("Payment Processing", "Stripe")
        .text("Email Service", "SendGrid")
        .text("AI Analysis", "TensorFlow.js + Custom Color Analysis")
        .text("PDF Generation", "Puppeteer")
        .text("Internationalization", "i18next")
        .text("Containerization", "Docker")
        .text("API Architecture", "RESTful APIs with proper error handling")
        .build()
}

/// The source tree layout, keyed by folder.
fn project_structure() -> Descriptor {
    Descriptor::builder()
        .nested(
            "src/",
            Descriptor::builder()
                .list(
                    "controllers/",
                    [
                        "auth.controller.ts",
                        "analysis.controller.ts",
                        "payment.controller.ts",
                        "user.controller.ts",
                    ],
                )
                .list(
                    "middleware/",
                    [
                        "auth.middleware.ts",
                        "upload.middleware.ts",
                        "validation.middleware.ts",
                    ],
                )
                .list(
                    "models/",
                    ["User.model.ts", "Analysis.model.ts", "Payment.model.ts"],
                )
                .list(
                    "routes/",
                    ["auth.routes.ts", "analysis.routes.ts", "payment.routes.ts"],
                )
                .list(
                    "services/",
                    [
                        "colorAnalysis.service.ts",
                        "email.service.ts",
                        "pdf.service.ts",
                        "stripe.service.ts",
                    ],
                )
                .list("utils/", ["database.ts", "logger.ts", "config.ts"])
                .list("types/", ["index.ts"])
                .build(),
        )
        .list(
            "config/",
            [
                "database.config.ts",
                "firebase.config.ts",
                "stripe.config.ts",
            ],
        )
        .text("uploads/", "Temporary file storage")
        .nested(
            "locales/",
            Descriptor::builder()
                .text("en/", "translation.json")
                .text("es/", "translation.json")
                .text("pt/", "translation.json")
                .build(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn top_level_sections_in_order() {
        let blueprint = blueprint();
        let keys: Vec<_> = blueprint.keys().collect();
        assert_eq!(
            keys,
            vec!["ColorPro Backend Architecture", "Project Structure"]
        );
    }

    #[test]
    fn architecture_lists_every_concern() {
        let blueprint = blueprint();
        let architecture = blueprint
            .get("ColorPro Backend Architecture")
            .and_then(Value::as_nested)
            .unwrap();

        assert_eq!(architecture.len(), 11);
        assert_eq!(
            architecture.get("Framework").and_then(Value::as_text),
            Some("Express.js with TypeScript")
        );
        assert_eq!(
            architecture.get("Database").and_then(Value::as_text),
            Some("MongoDB with Mongoose ODM")
        );
        assert_eq!(
            architecture.get("Payment Processing").and_then(Value::as_text),
            Some("Stripe")
        );
    }

    #[test]
    fn src_folder_layout_is_complete() {
        let blueprint = blueprint();
        let structure = blueprint
            .get("Project Structure")
            .and_then(Value::as_nested)
            .unwrap();
        let src = structure.get("src/").and_then(Value::as_nested).unwrap();

        let folders: Vec<_> = src.keys().collect();
        assert_eq!(
            folders,
            vec![
                "controllers/",
                "middleware/",
                "models/",
                "routes/",
                "services/",
                "utils/",
                "types/"
            ]
        );

        let controllers = src.get("controllers/").and_then(Value::as_list).unwrap();
        assert_eq!(controllers.len(), 4);
        assert_eq!(controllers[0], "auth.controller.ts");
    }

    #[test]
    fn locales_cover_three_languages() {
        let blueprint = blueprint();
        let structure = blueprint
            .get("Project Structure")
            .and_then(Value::as_nested)
            .unwrap();
        let locales = structure.get("locales/").and_then(Value::as_nested).unwrap();

        let languages: Vec<_> = locales.keys().collect();
        assert_eq!(languages, vec!["en/", "es/", "pt/"]);
        for (_, value) in locales.iter() {
            assert_eq!(value.as_text(), Some("translation.json"));
        }
    }

    #[test]
    fn uploads_is_plain_text() {
        let blueprint = blueprint();
        let structure = blueprint
            .get("Project Structure")
            .and_then(Value::as_nested)
            .unwrap();
        assert_eq!(
            structure.get("uploads/").and_then(Value::as_text),
            Some("Temporary file storage")
        );
    }
}
