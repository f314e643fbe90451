// File: src/samples.rs
use crate::error::{ChandasError, Result};

pub struct Sample {
    pub key: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub static SAMPLES: [Sample; 5] = [
    Sample {
        key: "gayatri",
        title: "गायत्री मंत्र",
        text: "ॐ भूर्भुवः स्वः\nतत्सवितुर्वरेण्यं\nभर्गो देवस्य धीमहि\nधियो यो नः प्रचोदयात्",
    },
    Sample {
        key: "ramayana",
        title: "रामायण श्लोक",
        text: "वाल्मीकिर्नाम मुनिराजः\nकृतवान् रामायणं महत्\nतस्य शिष्यो भवान् रामः\nसर्वशास्त्रविशारदः",
    },
    Sample {
        key: "gita",
        title: "भगवद्गीता श्लोक",
        text: "धर्मक्षेत्रे कुरुक्षेत्रे\nसमवेता युयुत्सवः\nमामकाः पाण्डवाश्चैव\nकिमकुर्वत सञ्जय",
    },
    Sample {
        key: "vedic",
        title: "वैदिक मंत्र",
        text: "अग्निमीळे पुरोहितं\nयज्ञस्य देवं ऋत्विजं\nहोतारं रत्नधातमं",
    },
    Sample {
        key: "vowels",
        title: "Test Simple",
        text: "अ आ इ ई उ ऊ ऋ ॠ ऌ ॡ ए ऐ ओ औ",
    },
];

pub fn lookup(key: &str) -> Result<&'static Sample> {
    SAMPLES
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| ChandasError::UnknownSample(key.to_string()))
}
