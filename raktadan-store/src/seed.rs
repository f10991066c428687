//! Statically seeded collections.
//!
//! Awareness entries and committee members have no remote endpoint; the
//! application ships them and their seeded order is the display order.

use raktadan_types::{AwarenessCategory, AwarenessInfo, CommitteeMember};

fn awareness(id: &str, title: &str, content: &str, category: AwarenessCategory) -> AwarenessInfo {
    AwarenessInfo {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category,
    }
}

/// The seeded awareness entries.
#[must_use]
pub fn awareness_entries() -> Vec<AwarenessInfo> {
    use AwarenessCategory::{Benefits, BloodGroupInfo, Rules};
    vec![
        awareness(
            "aw-1",
            "One donation can save up to three lives",
            "A single unit of blood is separated into red cells, plasma, and \
             platelets, each of which can go to a different patient. Regular \
             donors keep the local supply ready for accidents, surgery, and \
             childbirth emergencies.",
            Benefits,
        ),
        awareness(
            "aw-2",
            "Donating is good for the donor too",
            "Donation includes a free mini health check of pulse, blood \
             pressure, and haemoglobin. Regular donation also encourages the \
             body to produce fresh blood cells.",
            Benefits,
        ),
        awareness(
            "aw-3",
            "Who can donate",
            "Donors must be between 18 and 60 years of age, weigh at least \
             48 kg (45 kg for women), and be in general good health on the \
             day of donation.",
            Rules,
        ),
        awareness(
            "aw-4",
            "How often can you donate",
            "A healthy donor may give whole blood once every 120 days. The \
             body replaces the donated volume within a few days and the red \
             cells within a few weeks.",
            Rules,
        ),
        awareness(
            "aw-5",
            "Before and after donating",
            "Eat a proper meal and drink plenty of water before donating. \
             Afterwards rest for ten minutes, keep the bandage on for a few \
             hours, and avoid heavy lifting for the rest of the day.",
            Rules,
        ),
        awareness(
            "aw-6",
            "Know your blood group",
            "O- is the universal red cell donor and AB+ the universal \
             recipient. O+ is the most common group in Bangladesh, while \
             negative groups are rare and often urgently needed.",
            BloodGroupInfo,
        ),
        awareness(
            "aw-7",
            "Compatibility matters",
            "A patient can only receive red cells from a compatible group. \
             Rh-negative patients in particular depend on a small pool of \
             donors, which is why registering your group helps even if you \
             are never called.",
            BloodGroupInfo,
        ),
    ]
}

fn member(id: &str, name: &str, designation: &str, bio: Option<&str>) -> CommitteeMember {
    CommitteeMember {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        image_url: None,
        bio: bio.map(str::to_string),
    }
}

/// The seeded executive committee.
#[must_use]
pub fn committee_members() -> Vec<CommitteeMember> {
    vec![
        member(
            "cm-1",
            "Md. Ashraful Islam",
            "President",
            Some("Founding member; has organized donation camps in Khansama since 2018."),
        ),
        member(
            "cm-2",
            "Sharmin Akter",
            "Vice President",
            Some("Coordinates donor outreach with schools and colleges."),
        ),
        member("cm-3", "Rakibul Hasan", "General Secretary", None),
        member(
            "cm-4",
            "Nusrat Jahan",
            "Treasurer",
            Some("Keeps the camp accounts and manages supplies."),
        ),
        member("cm-5", "Tanvir Ahmed", "Organizing Secretary", None),
        member("cm-6", "Shahidul Islam", "Publicity Secretary", None),
    ]
}
