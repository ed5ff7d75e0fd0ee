//! Prompt templates for every gateway operation.
//!
//! Each builder embeds the typed inputs, relevant profile fields when
//! present, and (for structured outputs) an explicit instruction to respond
//! only with a JSON object of the expected shape.

use coach_core::{
    ActivityType, BibleStudyIntensity, ChatMessage, CommunityGroup, FeedbackLevel, JournalEntry,
    MessageSender, ModelRequest, UserProfile,
};

fn goal(profile: Option<&UserProfile>) -> &str {
    profile
        .map(|profile| profile.spiritual_goal.as_str())
        .filter(|goal| !goal.is_empty())
        .unwrap_or("general spiritual growth")
}

fn knowledge(profile: Option<&UserProfile>) -> String {
    profile
        .map(|profile| format!("{:?}", profile.bible_knowledge))
        .unwrap_or_else(|| "any level".to_string())
}

fn tradition(profile: Option<&UserProfile>) -> &str {
    profile
        .map(|profile| profile.preferred_tradition.as_str())
        .filter(|tradition| !tradition.is_empty())
        .unwrap_or("any Christian tradition")
}

fn transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|message| {
            let speaker = match message.sender {
                MessageSender::User => "User",
                MessageSender::Ai => "AI",
            };
            format!("{speaker}: {}", message.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interpretation in the voice of one theologian.
pub fn interpretation(theologian: &str, passage: &str) -> ModelRequest {
    ModelRequest::text(format!(
        "Adopt the persona and theological style of {theologian}. Provide a concise \
         interpretation (around 75-100 words) of the specific biblical verse \"{passage}\". Focus \
         on key theological insights characteristic of this theologian's general style of thought \
         and their associated tradition when interpreting this verse."
    ))
}

/// Cross-tradition synthesis of one passage.
pub fn synthesis(passage: &str, traditions: &[String]) -> ModelRequest {
    let tradition_segment = if traditions.is_empty() {
        "Provide a general overview considering major historical Christian perspectives.".to_string()
    } else {
        format!(
            "Draw from the key insights and historical theological emphases of the following \
             Christian tradition(s): {}. Consider the core tenets of these traditions as they \
             apply to the verse.",
            traditions.join(", ")
        )
    };
    ModelRequest::text(format!(
        "Provide a comprehensive, integral interpretation of the specific biblical verse \
         \"{passage}\". {tradition_segment} Focus on common agreements and key distinctives \
         regarding this text from these perspectives. Keep the synthesis concise yet thorough, \
         around 100-150 words."
    ))
}

/// Full chapter text, one numbered verse per line.
pub fn chapter(book: &str, chapter: u32) -> ModelRequest {
    ModelRequest::text(format!(
        "Please provide the full scripture text for {book} chapter {chapter}. Each verse should \
         be on a new line. Start each line *only* with the verse number followed by a space and \
         then the verse text. Do not add any other prefix, explanation, or \
         introductory/concluding remarks.\n\
         For example, for Genesis 1, the first few lines should be:\n\
         1 In the beginning God created the heavens and the earth.\n\
         2 Now the earth was formless and empty, darkness was over the surface of the deep, and \
         the Spirit of God was hovering over the waters.\n\
         3 And God said, \"Let there be light,\" and there was light."
    ))
}

/// Main coach turn: JSON `{reply, suggestions}`.
pub fn coach(user_message: &str, history: &[ChatMessage], profile: &UserProfile) -> ModelRequest {
    let style = match profile.ai_feedback_level {
        FeedbackLevel::Brief => {
            "Keep your responses brief and to the point. Focus on clarity and conciseness."
        }
        FeedbackLevel::Detailed => {
            "Provide detailed and comprehensive responses where appropriate, explaining concepts \
             thoroughly but accessibly."
        }
    };

    let system = format!(
        "You are GrowthPath, an intelligent and compassionate AI discipleship coach. Your primary \
         purpose is to help users deepen their understanding of the Bible and grow spiritually. \
         You are knowledgeable about Christian theology, various traditions, and biblical context.\n\
         User's name: {name}.\n\
         User's stated spiritual goal: \"{goal}\".\n\
         User's self-assessed Bible knowledge: {knowledge}.\n\
         User's preferred Christian tradition (or exploration status): {tradition}.\n\n\
         IMPORTANT:\n\
         1. Memory and Context: Carefully review the provided Chat History. Remember previous \
         interactions in this session and refer to the user's goals, interests, and past \
         discussion points to provide relevant and continuous guidance.\n\
         2. Personalization: Tailor your responses based on the user's profile information.\n\
         3. Tone: Maintain an empathetic, insightful, and encouraging tone. Be respectful of all \
         Christian traditions.\n\
         4. Guidance: Offer relevant scripture passages, theological points, or reflective \
         questions to guide the user.\n\
         5. Response Style: {style}\n\
         6. Emotion Awareness: Be attentive to the user's emotional state, whether explicitly \
         stated or implied, and address it with appropriate empathy, scripture, or prayerful \
         encouragement.\n\n\
         Respond ONLY with a JSON object with two keys: \"reply\" (string, your response to the \
         user) and \"suggestions\" (array of 2-3 short follow-up questions or topics, each under \
         80 characters).",
        name = profile.display_name(),
        goal = profile.spiritual_goal,
        knowledge = format!("{:?}", profile.bible_knowledge),
        tradition = profile.preferred_tradition,
    );

    ModelRequest::json(format!(
        "Chat History:\n{}\n\nUser: {user_message}\nAI:",
        transcript(history)
    ))
    .with_system(system)
}

/// Quick-widget coach turn: JSON `{reply, suggestions}`, short output.
pub fn quick_coach(
    user_message: &str,
    recent_history: &[ChatMessage],
    profile: &UserProfile,
) -> ModelRequest {
    let system = format!(
        "You are GrowthPath's Quick Assistant, a concise AI helper.\n\
         User's name: {name}.\n\
         User's spiritual goal: \"{goal}\".\n\
         Your role is to provide very brief spiritual insights, answer simple questions \
         succinctly (1-2 sentences), or suggest a quick Bible verse. If the query is complex or \
         requires deeper discussion, politely suggest the user visit the main \"AI Discipleship \
         Coach\" page. Do not provide long explanations here.\n\n\
         Respond ONLY with a JSON object with two keys: \"reply\" (string, 1-2 sentences) and \
         \"suggestions\" (array of 1-2 very short follow-up suggestions, each under 40 \
         characters).",
        name = profile.display_name(),
        goal = profile.spiritual_goal,
    );

    ModelRequest::json(format!(
        "Recent Chat (if any):\n{}\n\nUser: {user_message}\nAI:",
        transcript(recent_history)
    ))
    .with_system(system)
}

/// Passage analysis for journaling: JSON `{theme, keyVerse, applicationPoint}`.
pub fn journal_analysis(passage_text: &str) -> ModelRequest {
    ModelRequest::json(format!(
        "Analyze the following Bible passage or reference: \"{passage_text}\". Identify its main \
         theme, a key verse (specific verse like John 3:16 if applicable, or a representative \
         verse from the chapter if a chapter is given) that encapsulates this theme, and a \
         practical application point for personal reflection. Respond in JSON format with keys \
         \"theme\", \"keyVerse\", and \"applicationPoint\"."
    ))
}

/// Weekly study plan: JSON `{title, dailyPlan}`.
pub fn weekly_plan(intensity: BibleStudyIntensity, profile: Option<&UserProfile>) -> ModelRequest {
    ModelRequest::json(format!(
        "You are an AI Discipleship Coach. Create a Bible study plan for next week for a user.\n\
         Study intensity: {intensity}\n\
         User's spiritual goal: \"{goal}\"\n\
         User's Bible knowledge: {knowledge}\n\
         User's preferred tradition: {tradition}\n\n\
         The plan must cover all seven days, Monday through Sunday. Scale the depth of reading \
         and the number of tasks to the study intensity.\n\n\
         Respond ONLY with a JSON object with two keys: \"title\" (string, an encouraging name \
         for the week) and \"dailyPlan\" (array of 7 objects, each with keys \"day\" (string), \
         \"focus\" (string, the main theme or instruction), \"passage\" (string, optional \
         specific passage like \"Matthew 13:1-23\"), and \"tasks\" (array of strings, \
         optional)).",
        goal = goal(profile),
        knowledge = knowledge(profile),
        tradition = tradition(profile),
    ))
}

/// Per-activity suggestion: JSON `{suggestion, passageRef}`.
pub fn activity(
    activity_type: ActivityType,
    day_of_week: &str,
    profile: Option<&UserProfile>,
) -> ModelRequest {
    ModelRequest::json(format!(
        "You are an AI Discipleship Coach. For a user planning their week:\n\
         Activity Type: {activity_type}\n\
         Day of Week: {day_of_week}\n\
         User's spiritual goal: \"{goal}\"\n\
         User's Bible knowledge: {knowledge}\n\
         User's preferred tradition: {tradition}\n\n\
         Suggest a concise focus, theme, or specific Bible passage for this activity. If \
         suggesting a passage, provide the reference (e.g., \"John 3:16-18\"). The overall \
         suggestion should be brief and actionable.\n\n\
         Example for Bible Study: \"Focus on the Parable of the Sower in Matthew 13. Consider \
         what the different types of soil represent in your life.\" (Passage: Matthew 13:1-23)\n\
         Example for Prayer Time: \"Pray through Psalm 23, focusing on God as your Shepherd and \
         provider.\" (Passage: Psalm 23)\n\n\
         Provide your suggestion as a JSON object with two keys: \"suggestion\" (string, the \
         main descriptive suggestion) and \"passageRef\" (string, optional Bible passage like \
         \"Book C:V-V\"). Ensure the response is ONLY the JSON object.",
        goal = goal(profile),
        knowledge = knowledge(profile),
        tradition = tradition(profile),
    ))
}

/// Narrative summary of recent journal entries.
pub fn journal_summary(entries: &[JournalEntry]) -> ModelRequest {
    let entries_text = entries
        .iter()
        .map(|entry| {
            format!(
                "Entry on {date} titled \"{title}\" (Tags: {tags}):\n{text}\n---",
                date = entry.timestamp.format("%Y-%m-%d"),
                title = entry.title,
                tags = entry
                    .tags
                    .as_ref()
                    .map(|tags| tags.join(", "))
                    .unwrap_or_else(|| "none".to_string()),
                text = entry.text,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    ModelRequest::text(format!(
        "Based on the following journal entries, provide a concise summary (2-3 paragraphs). \
         Identify key recurring themes, emotions, spiritual questions, or insights. Offer a \
         gentle reflection or encouragement based on these observations. Do not list the \
         entries, just provide the summary.\n\nJournal Entries:\n{entries_text}"
    ))
}

/// Situational paraphrase of a passage.
pub fn contextualize(passage: &str, life_situation: &str) -> ModelRequest {
    ModelRequest::text(format!(
        "Take the core message or a key verse from the Bible passage \"{passage}\". Rephrase or \
         explain this message in 1-2 concise paragraphs as if you are speaking directly to \
         someone currently experiencing \"{life_situation}\". The aim is to make the scripture's \
         wisdom immediately relevant and applicable to their specific struggle or context. Do not \
         quote the original passage extensively; instead, transform its essence into a direct, \
         empathetic, and encouraging word for their situation."
    ))
}

/// Personalized prayer (~50-100 words).
pub fn prayer(situation: &str, profile: Option<&UserProfile>) -> ModelRequest {
    let mut prompt = format!(
        "The user is seeking a prayer related to the following situation, need, or feeling: \
         \"{situation}\".\n"
    );
    if let Some(profile) = profile {
        prompt.push_str(&format!(
            "\nFor context, this user's spiritual goal is: \"{}\". Their self-assessed Bible \
             knowledge is: {:?}. They identify with or are exploring the {} tradition.\n",
            profile.spiritual_goal, profile.bible_knowledge, profile.preferred_tradition
        ));
    }
    prompt.push_str(
        "\nPlease craft a heartfelt, biblically-grounded, and sensitive prayer of approximately \
         50-100 words. The prayer should be suitable for personal use and reflect an empathetic \
         understanding of the user's input. The tone should be comforting and encouraging. Do \
         not add any introductory or concluding remarks, just the prayer text itself.",
    );
    ModelRequest::text(prompt)
}

/// Scriptural wisdom: JSON `{title, content, passageRef}`.
pub fn wisdom(situation: &str, profile: Option<&UserProfile>) -> ModelRequest {
    ModelRequest::json(format!(
        "You are an empathetic AI spiritual guide. A user is facing the following situation: \
         \"{situation}\".\n\
         Their spiritual goal is: \"{goal}\".\n\
         Their Bible knowledge is: \"{knowledge}\".\n\
         Their preferred tradition is: \"{tradition}\".\n\n\
         Based on their situation and Christian spiritual principles, provide:\n\
         1. A concise, encouraging title for this guidance (e.g., 'Finding Peace in \
         Uncertainty').\n\
         2. A relevant Bible passage reference (e.g., Philippians 4:6-7) if one is clearly \
         applicable and specific.\n\
         3. A short (2-4 sentences) scriptural reflection or explanation of how biblical wisdom \
         applies directly to their situation. This should be encouraging and practical.\n\n\
         Respond ONLY in JSON format with keys: \"title\" (string), \"passageRef\" (string, \
         optional, provide only if a specific verse/short passage is highly relevant), and \
         \"content\" (string, the reflection).\n\
         Example JSON: {{\"title\": \"Hope in Difficult Times\", \"passageRef\": \"Romans \
         15:13\", \"content\": \"When you feel overwhelmed, remember that God is the source of \
         all hope.\"}}",
        goal = goal(profile),
        knowledge = knowledge(profile),
        tradition = tradition(profile),
    ))
}

/// Community-group matchmaking: JSON array of `{groupId, reason}`.
pub fn groups(
    profile: &UserProfile,
    all_groups: &[CommunityGroup],
    count: usize,
) -> ModelRequest {
    let groups_info = all_groups
        .iter()
        .map(|group| {
            format!(
                "- ID: {id}, Name: \"{name}\", Focus: \"{focus}\", Description: \"{description}\"",
                id = group.id,
                name = group.name,
                focus = group.focus_area,
                description = group.description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    ModelRequest::json(format!(
        "You are an AI community matchmaker for the GrowthPath Christian spiritual growth app.\n\
         User Profile:\n\
         Name: {name}\n\
         Spiritual Goal: \"{goal}\"\n\
         Spiritual Interests: \"{interests}\"\n\
         Preferred Tradition: \"{tradition}\"\n\n\
         Available Community Groups:\n{groups_info}\n\n\
         Based on the user's profile and the available groups, suggest up to {count} groups that \
         would be a particularly good fit. For each suggested group, provide its ID and a brief \
         (1-2 sentences) personalized reason why it's a good match for this user.\n\n\
         Respond ONLY in JSON format as an array of objects. Each object must have two keys: \
         \"groupId\" (string, corresponding to one of the provided group IDs) and \"reason\" \
         (string, your personalized reason). If no groups seem like a strong match, return an \
         empty array. Do not suggest groups not in the provided list.",
        name = profile.display_name(),
        goal = profile.spiritual_goal,
        interests = profile.spiritual_interests.as_deref().unwrap_or("Not specified"),
        tradition = profile.preferred_tradition,
    ))
}
