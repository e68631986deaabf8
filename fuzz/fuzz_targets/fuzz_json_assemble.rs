#![no_main]

use facturx::core::{InvoiceDocument, Profile};
use facturx::facturx::{assemble, xml};
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    // Any document that binds must assemble or fail cleanly at every profile.
    let Ok(mut doc) = serde_json::from_slice::<InvoiceDocument>(data) else {
        return;
    };
    for profile in Profile::iter() {
        doc.context.guideline = profile;
        if let Ok(tree) = assemble(&doc, profile) {
            let _ = xml::to_xml_string(&tree);
        }
    }
});
