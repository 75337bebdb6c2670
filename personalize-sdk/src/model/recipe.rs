//! Recipes and feature transformations

use typed_record_rs::{record, string_enum, Timestamp};

use super::constraints::*;

string_enum! {
    /// Who provides a recipe
    pub enum RecipeProvider {
        Service = "SERVICE",
    }
}

record! {
    /// An algorithm paired with a feature transformation
    pub struct Recipe {
        name: String = "name" [NAME],
        recipe_arn: String = "recipeArn" [ARN],
        algorithm_arn: String = "algorithmArn" [ARN],
        feature_transformation_arn: String = "featureTransformationArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        description: String = "description",
        creation_date_time: Timestamp = "creationDateTime",
        /// `USER_PERSONALIZATION`, `PERSONALIZED_RANKING` or `RELATED_ITEMS`
        recipe_type: String = "recipeType" [SHORT_TEXT],
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct RecipeSummary {
        name: String = "name" [NAME],
        recipe_arn: String = "recipeArn" [ARN],
        status: String = "status" [SHORT_TEXT],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
    }
}

record! {
    pub struct FeatureTransformation {
        name: String = "name" [NAME],
        feature_transformation_arn: String = "featureTransformationArn" [ARN],
        default_parameters: {String} = "defaultParameters" [PARAMETER_MAP],
        creation_date_time: Timestamp = "creationDateTime",
        last_updated_date_time: Timestamp = "lastUpdatedDateTime",
        status: String = "status" [SHORT_TEXT],
    }
}

record! {
    pub struct DescribeFeatureTransformationRequest {
        feature_transformation_arn: String = "featureTransformationArn" [ARN],
    }
}

record! {
    pub struct DescribeFeatureTransformationResult {
        feature_transformation: FeatureTransformation = "featureTransformation",
    }
}

record! {
    pub struct DescribeRecipeRequest {
        recipe_arn: String = "recipeArn" [ARN],
    }
}

record! {
    pub struct DescribeRecipeResult {
        recipe: Recipe = "recipe",
    }
}

record! {
    pub struct ListRecipesRequest {
        recipe_provider: RecipeProvider = "recipeProvider",
        next_token: String = "nextToken" [NEXT_TOKEN],
        max_results: i32 = "maxResults" [MAX_RESULTS],
    }
}

record! {
    pub struct ListRecipesResult {
        recipes: [RecipeSummary] = "recipes" [PAGE],
        next_token: String = "nextToken" [NEXT_TOKEN],
    }
}
