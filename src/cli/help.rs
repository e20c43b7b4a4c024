//! Usage guide for first-time users.

#![allow(clippy::print_stdout)]

use crate::taxonomy::PLANTS;

/// Print the photo guide and a short walkthrough.
pub fn print_guide() {
    println!("Leaves recognized, nature understood!");
    println!();
    println!("How to use:");
    println!("  1. Take a photo of one herbal-plant leaf.");
    println!("  2. Run: leafix classify <photo.jpg>");
    println!("  3. Compare the results of both models.");
    println!();
    println!("Things to keep in mind:");
    println!("  - Photograph a single leaf on a white background for the most accurate result.");
    println!("  - Only .jpg, .jpeg and .png files are accepted.");
    println!("  - The first run downloads both models; later runs in the same process reuse them.");
    println!(
        "  - The photo is checked before the models load, so a bad file is reported even when the models are unavailable."
    );
    println!("  - If any model cannot be loaded, nothing is classified.");
    println!();
    println!(
        "Recognized plants: {}",
        PLANTS.iter().map(|p| p.label).collect::<Vec<_>>().join(", ")
    );
    println!();
    println!("Run 'leafix species <LABEL>' for a plant's taxonomy.");
}
