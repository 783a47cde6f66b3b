//! Fixed reply templates.
//!
//! Every outbound text the bot can produce lives here, so handlers and tests
//! share one source of truth.

use crate::domain::PhoneRecord;

pub const WELCOME: &str = "Welcome to the Phone Number Detector Bot!\n\n\
I can recognize phone numbers in various formats:\n\
- International format: +1 234 567 8900\n\
- National format: (234) 567-8900\n\
- Numbers with spaces, dashes or dots\n\
- Numbers starting with 00 or 0\n\n\
Available commands:\n\
/start - Show this welcome message\n\
/help - Show detailed examples and help\n\
/formats - Show accepted number formats\n\
/phone <number> - Analyze a phone number";

pub const HELP: &str = "How to use this bot:\n\n\
Send me any phone number and I will:\n\
- Detect the country\n\
- Validate the number\n\
- Show local and international formats\n\
- Identify the number type (mobile, landline, etc.)\n\n\
Example formats I understand:\n\
+1 234 567 8900 (International)\n\
00 44 7911 123456 (International with 00)\n\
(03) 9123 4567 (Australian)\n\
01234 567890 (UK)\n\
234-567-8900 (US/Canada)\n\n\
Use /formats for more format examples";

pub const FORMATS: &str = "Accepted Phone Number Formats:\n\n\
1. International Format:\n\
   +1 234 567 8900\n\
   001 234 567 8900\n\
   +44.7911.123456\n\n\
2. National Format:\n\
   (234) 567-8900\n\
   234.567.8900\n\
   2345678900\n\n\
3. Special Formats:\n\
   00441234567890\n\
   01234 567890 (UK)\n\
   0412 345 678 (AU)\n\n\
The bot will try to detect the country automatically!";

pub const PHONE_USAGE: &str = "Please provide a phone number after the command.\n\
Example: /phone +1 234 567 8900\n\n\
Type /formats to see accepted number formats.";

pub const INVALID_NUMBER: &str = "This doesn't seem to be a valid phone number.\n\n\
Try these formats:\n\
- Add country code: +1, +44, etc.\n\
- Remove special characters\n\
- Check the number length\n\n\
Type /formats to see all accepted formats.";

pub const PROCESSING_FAILURE: &str = "Sorry, I had trouble processing that number.\n\n\
Common issues:\n\
- Missing country code\n\
- Invalid format\n\
- Unsupported region\n\n\
Type /help to see example formats.";

/// Render the analysis template for a successful parse.
pub fn analysis(record: &PhoneRecord) -> String {
    format!(
        "Phone Number Analysis:\n\n\
         Country: {}\n\
         Country Code: {}\n\
         Type: {}\n\
         Local Format: {}\n\
         International: {}\n\
         Validation: {}",
        record.country,
        record.country_code,
        record.number_type,
        record.national_format,
        record.international_format,
        if record.is_valid {
            "Valid number"
        } else {
            "Invalid number"
        }
    )
}
