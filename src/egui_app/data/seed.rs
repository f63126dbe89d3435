use crate::shared::Contact;

/// (id, first, last, twitter, favorite)
const SAMPLES: &[(&str, &str, &str, &str, bool)] = &[
    ("shruti", "Shruti", "Kapoor", "@shrutikapoor08", false),
    ("glenn", "Glenn", "Reyes", "@glnnrys", true),
    ("ryan", "Ryan", "Florence", "@ryanflorence", false),
    ("oscar", "Oscar", "Newman", "@__oscarnewman", false),
    ("michael", "Michael", "Jackson", "@mjackson", false),
    ("christopher", "Christopher", "Chedeau", "@Vjeux", false),
    ("cameron", "Cameron", "Matheson", "@cmatheson", false),
    ("brooks", "Brooks", "Lybrand", "@BrooksLybrand", true),
    ("alex", "Alex", "Anderson", "@ralex1993", false),
    ("kent", "Kent C.", "Dodds", "@kentcdodds", false),
    ("nevi", "Nevi", "Shah", "@nevikashah", false),
    ("andrew", "Andrew", "Petersen", "@aptersen", false),
    ("scott", "Scott", "Smerchek", "@smerchek", false),
    ("giovanni", "Giovanni", "Benussi", "@giovannibenussi", false),
    ("igor", "Igor", "Minar", "@IgorMinar", false),
    ("brandon", "Brandon", "Kish", "@BrandonKish", false),
    ("arisa", "Arisa", "Fukuzaki", "@arisa_dev", false),
    ("alexandra", "Alexandra", "Spalato", "@alexadark", false),
    ("cat", "Cat", "Johnson", "@catchroma_", false),
    ("ashley", "Ashley", "Narcisse", "@_darkfadr", false),
];

/// Sample address book used when no seed file is configured
pub fn seed_contacts() -> Vec<Contact> {
    SAMPLES
        .iter()
        .map(|(id, first, last, twitter, favorite)| {
            let mut contact = Contact::new(*id, *first, *last).with_favorite(*favorite);
            contact.twitter = Some(twitter.to_string());
            contact
        })
        .collect()
}
