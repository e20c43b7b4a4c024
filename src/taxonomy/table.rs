//! Static herbal-plant taxonomy table.
//!
//! Entries are stored in model-output order: index `i` of a model's
//! probability vector corresponds to `PLANTS[i]`.

use super::{PlantRecord, Taxonomy};

/// Every plant the classifiers know, in model-output order.
pub static PLANTS: [PlantRecord; 10] = [
    PlantRecord {
        label: "BIDARA",
        scientific_name: "Ziziphus mauritiana",
        synonyms: &["Widara", "Dara", "Bukkol", "Bekul", "Bedara", "Kalangga"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Rosid"],
            order: "Rhamnales",
            family: "Rhamnaceae",
            genus: "Ziziphus",
            species: "Z. mauritiana",
        },
        image_path: "gambar/pohon/Bidara.jpeg",
    },
    PlantRecord {
        label: "BINAHONG",
        scientific_name: "Anredera cordifolia",
        synonyms: &["Piahong", "Piyahong"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta"],
            order: "Caryophyllales",
            family: "Basellaceae",
            genus: "Anredera",
            species: "Anredera cordifolia",
        },
        image_path: "gambar/pohon/Binahong.jpg",
    },
    PlantRecord {
        label: "CINCAU",
        scientific_name: "Cyclea barbata",
        synonyms: &["Camcao", "Camcauh", "Juju", "Kepleng", "Krotok", "Tahulu"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil"],
            order: "Ranunculales",
            family: "Menispermaceae",
            genus: "Cyclea",
            species: "C. barbata",
        },
        image_path: "gambar/pohon/Cincau.jpeg",
    },
    PlantRecord {
        label: "KEJIBELING",
        scientific_name: "Strobilanthes crispus",
        synonyms: &["Kecibeling", "Picah Beling", "Ki Beling", "Enyoh Kelo"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Angiosperma", "Eudikotil", "Asterid"],
            order: "Lamiales",
            family: "Acanthaceae",
            genus: "Strobilanthes",
            species: "S. crispa",
        },
        image_path: "gambar/pohon/Kejibeling.jpeg",
    },
    PlantRecord {
        label: "KELOR",
        scientific_name: "Moringa oleifera",
        synonyms: &["Limaran", "Merunggai", "Moringa"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Rosid"],
            order: "Brassicales",
            family: "Moringaceae",
            genus: "Moringa",
            species: "M. oleifera",
        },
        image_path: "gambar/pohon/Kelor.jpg",
    },
    PlantRecord {
        label: "KETAPANG",
        scientific_name: "Terminalia catappa",
        synonyms: &[
            "Katapang", "Hatapang", "Talisei", "Tiliso", "Sarisa", "Lisa", "Kalis",
        ],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Rosid"],
            order: "Myrtales",
            family: "Combretaceae",
            genus: "Terminalia",
            species: "T. catappa",
        },
        image_path: "gambar/pohon/Ketapang.jpg",
    },
    PlantRecord {
        label: "PULAI",
        scientific_name: "Alstonia scholaris",
        synonyms: &["Pule", "Kayu Gabus", "Lame", "Lamo", "Jelutung"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Asterid"],
            order: "Gentianales",
            family: "Apocynaceae",
            genus: "Alstonia",
            species: "A. scholaris",
        },
        image_path: "gambar/pohon/Pulai.jpeg",
    },
    PlantRecord {
        label: "SALAM",
        scientific_name: "Syzygium polyanthum",
        synonyms: &["Ubar Seribu", "Serai Kayu", "Salam Kojo"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Rosid"],
            order: "Myrtales",
            family: "Myrtaceae",
            genus: "Syzygium",
            species: "S. polyanthum",
        },
        image_path: "gambar/pohon/Salam.jpg",
    },
    PlantRecord {
        label: "SAMBUNGNYAWA",
        scientific_name: "Gynura procumbens",
        synonyms: &["Daun Dewa", "Akar Sebiak"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Eudikotil", "Asterid"],
            order: "Asterales",
            family: "Asteraceae",
            genus: "Gynura",
            species: "G. procumbens",
        },
        image_path: "gambar/pohon/SambungNyawa.jpg",
    },
    PlantRecord {
        label: "SIRIH",
        scientific_name: "Piper betle L.",
        synonyms: &["Suruh", "Lu'at", "Sireh", "Bido", "Base", "Amo"],
        taxonomy: Taxonomy {
            kingdom: "Plantae",
            clades: &["Tracheophyta", "Angiospermae", "Magnoliid"],
            order: "Piperales",
            family: "Piperaceae",
            genus: "Piper",
            species: "P. betle",
        },
        image_path: "gambar/pohon/Sirih.jpg",
    },
];
