//! The built-in demo catalog used when no authored content is supplied.

use super::{Catalog, Chapter, Standard};
use crate::slides::{
    BucketMatchSlide, ChoiceOption, ChoiceSlide, Description, Item, LabeledImage, LearnSlide,
    Narration, QuizOption, QuizSlide, SequenceSlide, SlideDescriptor, SortSlide, Step, Target,
};

impl Catalog {
    /// The catalog bundled with the app: a small unit on the world
    /// around us, aimed at early primary school.
    pub fn builtin() -> Self {
        Catalog::new()
            .with_standard(
                Standard::new("1", "Standard 1")
                    .with_chapter(world_around_us())
                    .with_chapter(water_around_us()),
            )
            .with_standard(
                Standard::new("2", "Standard 2").with_chapter(living_things()),
            )
    }
}

fn world_around_us() -> Chapter {
    Chapter::new("1", "The World Around Us")
        .with_quiz()
        .with_slide(SlideDescriptor::Learn(
            LearnSlide::new(
                "Natural and Man-Made",
                Description::paragraphs([
                    "Look around you. Some things were made by nature, like trees, \
                     rivers, and mountains.",
                    "Other things were made by people, like chairs, roads, and \
                     bicycles. We call these man-made things.",
                ]),
            )
            .with_hero_image("images/world/hero.png")
            .with_example(LabeledImage::new("Tree", "images/world/tree.png"))
            .with_example(LabeledImage::new("River", "images/world/river.png"))
            .with_example(LabeledImage::new("Chair", "images/world/chair.png"))
            .with_example(LabeledImage::new("Bicycle", "images/world/bicycle.png"))
            .with_narration(
                Narration::file("audio/world/natural-man-made.mp3").with_speak_text(
                    "Look around you! Some things were made by nature, and some \
                     were made by people.",
                ),
            ),
        ))
        .with_slide(SlideDescriptor::Sort(
            SortSlide::new("Sort the Things", "Drag each thing to its group")
                .with_item(Item::new("t1", "Tree", "natural").with_image("images/world/tree.png"))
                .with_item(Item::new("r1", "River", "natural").with_image("images/world/river.png"))
                .with_item(Item::new("c1", "Chair", "man-made").with_image("images/world/chair.png"))
                .with_item(
                    Item::new("b1", "Bicycle", "man-made").with_image("images/world/bicycle.png"),
                )
                .with_target(Target::new("natT", "Natural Things", "natural"))
                .with_target(Target::new("manT", "Man-Made Things", "man-made"))
                .with_narration(Narration::speak(
                    "Drag each thing into the group where it belongs.",
                )),
        ))
        .with_slide(SlideDescriptor::BucketMatch(
            BucketMatchSlide::new(
                "Match Each Animal to Its Home",
                "Drop every animal onto its home",
            )
            .with_item(Item::new("dog", "Dog", "dog").with_image("images/homes/dog.png"))
            .with_item(Item::new("bird", "Bird", "bird").with_image("images/homes/bird.png"))
            .with_item(Item::new("bee", "Bee", "bee").with_image("images/homes/bee.png"))
            .with_bucket(Target::new("kennel", "Kennel", "dog").with_image("images/homes/kennel.png"))
            .with_bucket(Target::new("nest", "Nest", "bird").with_image("images/homes/nest.png"))
            .with_bucket(Target::new("hive", "Hive", "bee").with_image("images/homes/hive.png"))
            .with_narration(Narration::speak("Every animal has a home. Can you match them?")),
        ))
        .with_slide(SlideDescriptor::Sequence(
            SequenceSlide::new("How a Plant Grows", "Put the steps in order")
                .with_step(Step::new("sprout", "A little sprout appears"))
                .with_step(Step::new("seed", "A seed is planted in the soil"))
                .with_step(Step::new("tree", "It grows into a big tree"))
                .with_step(Step::new("sapling", "The sprout becomes a sapling"))
                .with_correct_order(["seed", "sprout", "sapling", "tree"]),
        ))
        .with_slide(SlideDescriptor::WhoAmI(
            ChoiceSlide::new(
                Description::paragraphs([
                    "I am very tall.",
                    "I have a trunk, branches, and leaves.",
                    "Birds build their nests on me.",
                ]),
                "Who am I?",
            )
            .with_option(ChoiceOption::new("river", "A river"))
            .with_option(ChoiceOption::correct("tree", "A tree"))
            .with_option(ChoiceOption::new("mountain", "A mountain"))
            .with_final_question(),
        ))
}

fn water_around_us() -> Chapter {
    Chapter::new("2", "Water Around Us")
        .with_slide(SlideDescriptor::Learn(
            LearnSlide::new(
                "Where We Find Water",
                Description::paragraphs([
                    "Water is all around us: in rivers, lakes, and the sea.",
                    "Rain brings water from the clouds down to the ground.",
                ]),
            )
            .with_hero_image("images/water/hero.png")
            .with_narration(Narration::speak("Water is everywhere! Let's find out where.")),
        ))
        .with_slide(SlideDescriptor::Quiz(
            QuizSlide::new("Which of these is a natural source of water?")
                .with_option(
                    QuizOption::correct("river", "A river")
                        .with_explanation("Rivers form by themselves, without any help from people."),
                )
                .with_option(
                    QuizOption::new("tap", "A tap")
                        .with_explanation("Taps are made by people to bring water into our homes."),
                )
                .with_option(
                    QuizOption::new("bottle", "A water bottle")
                        .with_explanation("Bottles are made by people in factories."),
                ),
        ))
}

fn living_things() -> Chapter {
    Chapter::new("1", "Living and Non-Living").with_slide(SlideDescriptor::Learn(
        LearnSlide::new(
            "What Is Alive?",
            Description::paragraphs([
                "Living things grow, eat, and breathe. Plants and animals are living things.",
                "Non-living things do not grow or eat. Rocks and toys are non-living things.",
            ]),
        )
        .with_narration(Narration::speak("Some things are alive, and some are not.")),
    ))
}
