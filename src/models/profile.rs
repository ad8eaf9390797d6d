use serde::{Deserialize, Serialize};

keyed_enum! {
    /// Biological sex as used by the energy formulas.
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

keyed_enum! {
    Goal {
        FatLoss => "fat_loss",
        MuscleGain => "muscle_gain",
        Maintenance => "maintenance",
        Recomposition => "recomposition",
        Performance => "performance",
    }
}

keyed_enum! {
    JobType {
        DeskJob => "desk_job",
        StandingJob => "standing_job",
        PhysicalJob => "physical_job",
        Mixed => "mixed",
        Unemployed => "unemployed",
        Student => "student",
    }
}

keyed_enum! {
    /// Occupational activity level; keys the base activity multiplier.
    ActivityLevel {
        Sedentary => "sedentary",
        Light => "light",
        Moderate => "moderate",
        Active => "active",
        VeryActive => "very_active",
    }
}

keyed_enum! {
    CommuteType {
        Car => "car",
        PublicTransport => "public_transport",
        Walking => "walking",
        Cycling => "cycling",
        Remote => "remote",
    }
}

keyed_enum! {
    HouseholdActivity {
        Minimal => "minimal",
        Light => "light",
        Moderate => "moderate",
        Active => "active",
    }
}

keyed_enum! {
    FidgetingLevel {
        VeryStill => "very_still",
        SomeFidgeting => "some_fidgeting",
        ModerateFidgeting => "moderate_fidgeting",
        LotsOfFidgeting => "lots_of_fidgeting",
    }
}

keyed_enum! {
    /// Standing vs sitting posture over the day.
    Posture {
        MostlySitting => "mostly_sitting",
        Mixed => "mixed",
        MostlyStanding => "mostly_standing",
        AlwaysMoving => "always_moving",
    }
}

keyed_enum! {
    TrainingType {
        Powerlifting => "powerlifting",
        Bodybuilding => "bodybuilding",
        Crossfit => "crossfit",
        Running => "running",
        Cycling => "cycling",
        Swimming => "swimming",
        Yoga => "yoga",
        Pilates => "pilates",
        MartialArts => "martial_arts",
        TeamSports => "team_sports",
        Hiking => "hiking",
        Dancing => "dancing",
        Climbing => "climbing",
        Other => "other",
    }
}

keyed_enum! {
    Intensity {
        Low => "low",
        Moderate => "moderate",
        High => "high",
        VeryHigh => "very_high",
    }
}

keyed_enum! {
    SleepQuality {
        Poor => "poor",
        Fair => "fair",
        Good => "good",
        Excellent => "excellent",
    }
}

keyed_enum! {
    /// Five-step rating shared by stress and motivation.
    Rating {
        VeryLow => "very_low",
        Low => "low",
        Moderate => "moderate",
        High => "high",
        VeryHigh => "very_high",
    }
}

keyed_enum! {
    MealFrequency {
        OneToTwo => "1-2_meals",
        Three => "3_meals",
        FourToFive => "4-5_meals",
        SixPlus => "6+_meals",
    }
}

keyed_enum! {
    MealTiming {
        EarlyBird => "early_bird",
        Normal => "normal",
        NightOwl => "night_owl",
        Irregular => "irregular",
    }
}

keyed_enum! {
    MealPrep {
        Never => "never",
        Rarely => "rarely",
        Sometimes => "sometimes",
        Often => "often",
        Always => "always",
    }
}

keyed_enum! {
    SupportSystem {
        NoSupport => "none",
        Minimal => "minimal",
        Moderate => "moderate",
        Strong => "strong",
    }
}

keyed_enum! {
    AdherenceRisk {
        WeekendBinges => "weekend_binges",
        SocialEating => "social_eating",
        StressEating => "stress_eating",
        Travel => "travel",
        WorkSchedule => "work_schedule",
        FamilyObligations => "family_obligations",
        LackOfTime => "lack_of_time",
        LackOfMotivation => "lack_of_motivation",
        Perfectionism => "perfectionism",
        AllOrNothing => "all_or_nothing",
        EmotionalEating => "emotional_eating",
        BoredomEating => "boredom_eating",
    }
}

/// Caller-supplied profile. Never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    pub goal: Goal,
    pub lifestyle: Lifestyle,
    pub training: Training,
    pub health: Health,
    pub behavioral: Behavioral,
}

impl UserProfile {
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    /// Body fat measurement, if one was supplied and is positive.
    pub fn measured_body_fat(&self) -> Option<f64> {
        self.body_fat_percent.filter(|bf| *bf > 0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Lifestyle {
    pub daily_routine_description: String,
    pub job_type: JobType,
    pub job_activity_level: ActivityLevel,
    pub commute_type: CommuteType,
    pub household_activity_level: HouseholdActivity,
    pub fidgeting_level: FidgetingLevel,
    pub standing_vs_sitting: Posture,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Training {
    pub training_description: String,
    pub training_types: Vec<TrainingType>,
    pub training_frequency_per_week: f64,
    pub training_duration_minutes: f64,
    pub training_intensity: Intensity,
    pub training_experience_years: f64,
}

impl Training {
    /// The first listed training type drives the per-type tables.
    pub fn primary_type(&self) -> Option<&TrainingType> {
        self.training_types.first()
    }

    pub fn includes(&self, training_type: &TrainingType) -> bool {
        self.training_types.contains(training_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours_per_night: f64,
    #[serde(default)]
    pub sleep_quality: SleepQuality,
    #[serde(default)]
    pub stress_level: Rating,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub thyroid_issues: bool,
    #[serde(default)]
    pub diabetes: bool,
}

fn default_sleep_hours() -> f64 {
    7.0
}

impl Default for Health {
    fn default() -> Self {
        Self {
            sleep_hours_per_night: default_sleep_hours(),
            sleep_quality: SleepQuality::default(),
            stress_level: Rating::default(),
            medical_conditions: Vec::new(),
            thyroid_issues: false,
            diabetes: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavioral {
    pub meal_frequency: MealFrequency,
    pub meal_timing_preference: MealTiming,
    pub meal_prep_frequency: MealPrep,
    pub adherence_risks: Vec<AdherenceRisk>,
    pub motivation_level: Rating,
    pub support_system: SupportSystem,
}
