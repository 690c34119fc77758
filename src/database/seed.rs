use crate::models::Activity;

struct SeedRow {
    name: &'static str,
    description: &'static str,
    leader: Option<&'static str>,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedRow] = &[
    SeedRow {
        name: "Basketball Team",
        description: "Join the basketball team and compete in local tournaments",
        leader: Some("Coach Smith"),
        schedule: "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedRow {
        name: "Soccer Club",
        description: "Practice soccer skills and participate in matches",
        leader: Some("Coach Lee"),
        schedule: "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 20,
        participants: &[],
    },
    SeedRow {
        name: "Art Club",
        description: "Explore various art techniques and create projects",
        leader: Some("Ms. Davis"),
        schedule: "Fridays, 3:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &[],
    },
    SeedRow {
        name: "Drama Club",
        description: "Participate in theater productions and improve acting skills",
        leader: Some("Mr. Brown"),
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedRow {
        name: "Debate Team",
        description: "Engage in debates and develop public speaking skills",
        leader: Some("Ms. Wilson"),
        schedule: "Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &[],
    },
    SeedRow {
        name: "Math Club",
        description: "Solve challenging math problems and participate in competitions",
        leader: Some("Mr. Taylor"),
        schedule: "Tuesdays, 3:00 PM - 4:30 PM",
        max_participants: 20,
        participants: &[],
    },
    SeedRow {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        leader: Some("Mr. Johnson"),
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedRow {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        leader: None,
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedRow {
        name: "Gym Class",
        description: "Physical education and sports activities",
        leader: None,
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// Fresh copy of the built-in dataset the directory starts from.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|row| {
            let activity = Activity {
                description: row.description.to_string(),
                leader: row.leader.map(str::to_string),
                schedule: row.schedule.to_string(),
                max_participants: row.max_participants,
                participants: row.participants.iter().map(|p| p.to_string()).collect(),
            };
            (row.name.to_string(), activity)
        })
        .collect()
}
